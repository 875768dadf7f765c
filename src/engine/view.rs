//! View Source Abstractions
//!
//! Rendering lives outside this crate. A host engine binds entities to
//! visual objects through a **view source**, and the only contract this crate
//! needs from one is:
//!
//! - [`ViewSource::source`] hands out the opaque view the host instantiates,
//! - [`ViewSource::validate`] rebuilds internal state from current geometry
//!   and visual-component data.
//!
//! [`BoundView`] is the generic adapter: it owns a [`ViewData`] payload,
//! creates it lazily with `Default` on first validation, and forwards the
//! host-supplied [`Transform`] and visual references to it.

/// Position, rotation (Euler degrees), and scale of a view root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: [f32; 3],
    /// Euler rotation in degrees.
    pub rotation: [f32; 3],
    /// Local scale.
    pub scale: [f32; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: [0.0; 3], rotation: [0.0; 3], scale: [1.0; 3] }
    }
}

/// Host-side view binding.
pub trait ViewSource {
    /// Opaque handle the host instantiates views from.
    type View;

    /// Returns the source handle, or `None` before the first validation.
    fn source(&self) -> Option<&Self::View>;

    /// Rebuilds state from current geometry; `reset` discards cached data.
    fn validate(&mut self, reset: bool);
}

/// Payload rebuilt whenever its owning view is validated.
pub trait ViewData: Default {
    /// Visual components gathered by the host (meshes, renderers, emitters).
    type Visuals;

    /// Receives the current geometry and visuals.
    fn on_validate(&mut self, transform: &Transform, visuals: &Self::Visuals, reset: bool);
}

/// Generic [`ViewSource`] holding a lazily created [`ViewData`].
pub struct BoundView<T: ViewData> {
    data: Option<T>,
    transform: Transform,
    visuals: T::Visuals,
}

impl<T: ViewData> BoundView<T> {
    /// Creates an unvalidated binding.
    pub fn new(transform: Transform, visuals: T::Visuals) -> Self {
        Self { data: None, transform, visuals }
    }

    /// Updates the geometry used by the next validation.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Mutable access to the visuals used by the next validation.
    pub fn visuals_mut(&mut self) -> &mut T::Visuals {
        &mut self.visuals
    }
}

impl<T: ViewData> ViewSource for BoundView<T> {
    type View = T;

    fn source(&self) -> Option<&T> {
        self.data.as_ref()
    }

    fn validate(&mut self, reset: bool) {
        let data = self.data.get_or_insert_with(T::default);
        data.on_validate(&self.transform, &self.visuals, reset);
    }
}
