use archetype_mask::{BoundView, Transform, ViewData, ViewSource};

#[derive(Default)]
struct Emitters {
    meshes: Vec<&'static str>,
    emitters: usize,
}

#[derive(Debug, Default, PartialEq)]
struct ParticleData {
    origin: [f32; 3],
    meshes: usize,
    emitters: usize,
    validations: u32,
    resets: u32,
}

impl ViewData for ParticleData {
    type Visuals = Emitters;

    fn on_validate(&mut self, transform: &Transform, visuals: &Emitters, reset: bool) {
        self.origin = transform.position;
        self.meshes = visuals.meshes.len();
        self.emitters = visuals.emitters;
        self.validations += 1;
        if reset {
            self.resets += 1;
        }
    }
}

#[test]
fn source_is_absent_until_validated() {
    let view: BoundView<ParticleData> = BoundView::new(Transform::default(), Emitters::default());
    assert!(view.source().is_none());
}

#[test]
fn validation_creates_and_refreshes_data() {
    let transform = Transform { position: [1.0, 2.0, 3.0], ..Transform::default() };
    let visuals = Emitters { meshes: vec!["spark"], emitters: 2 };
    let mut view: BoundView<ParticleData> = BoundView::new(transform, visuals);

    view.validate(false);
    let data = view.source().unwrap();
    assert_eq!(data.origin, [1.0, 2.0, 3.0]);
    assert_eq!((data.meshes, data.emitters), (1, 2));
    assert_eq!((data.validations, data.resets), (1, 0));

    view.set_transform(Transform { position: [0.0, 5.0, 0.0], ..Transform::default() });
    view.visuals_mut().meshes.push("smoke");
    view.validate(true);

    let data = view.source().unwrap();
    assert_eq!(data.origin, [0.0, 5.0, 0.0]);
    assert_eq!(data.meshes, 2);
    assert_eq!((data.validations, data.resets), (2, 1));
}

#[test]
fn default_transform_has_unit_scale() {
    assert_eq!(Transform::default().scale, [1.0; 3]);
}
