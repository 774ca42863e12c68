use std::cell::RefCell;
use std::rc::Rc;

use colorwell::{Color, ColorPicker, InputBinding, Origin, PickerError, PickerOptions};

/// Records every snapshot pushed into it, standing in for a widget-backed
/// binding.
struct RecordingBinding {
    origin: Origin,
    seen: Rc<RefCell<Vec<String>>>,
}

impl InputBinding for RecordingBinding {
    fn origin(&self) -> Origin {
        self.origin
    }

    fn refresh(&mut self, color: &Color) {
        self.seen.borrow_mut().push(color.hex.clone());
    }
}

fn recording_binding(origin: Origin) -> (Box<RecordingBinding>, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let binding = Box::new(RecordingBinding {
        origin,
        seen: seen.clone(),
    });

    (binding, seen)
}

#[test]
fn initial_color_defaults_to_red() {
    let picker = ColorPicker::new(PickerOptions::default()).unwrap();
    let color = picker.get_color();

    assert_eq!(color.hex, "#ff0000");
    assert_eq!((color.rgb.r, color.rgb.g, color.rgb.b), (255, 0, 0));
    assert_eq!((color.hsl.h, color.hsl.s, color.hsl.l), (0, 100, 50));
}

#[test]
fn invalid_initial_color_is_a_construction_error() {
    let options = PickerOptions {
        color: "#ff00".to_owned(),
        ..PickerOptions::default()
    };

    assert!(matches!(
        ColorPicker::new(options),
        Err(PickerError::InvalidInitialColor(_))
    ));
}

#[test]
fn set_color_updates_all_representations() {
    let mut picker = ColorPicker::new(PickerOptions::default()).unwrap();
    picker.set_color("#00ff00", Origin::Hex);

    let color = picker.get_color();
    assert_eq!(color.hex, "#00ff00");
    assert_eq!((color.rgb.r, color.rgb.g, color.rgb.b), (0, 255, 0));
    assert_eq!((color.hsl.h, color.hsl.s, color.hsl.l), (120, 100, 50));
}

#[test]
fn set_color_normalizes_bare_and_uppercase_hex() {
    let mut picker = ColorPicker::new(PickerOptions::default()).unwrap();

    picker.set_color("ABCDEF", Origin::Hex);
    assert_eq!(picker.get_color().hex, "#abcdef");
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn malformed_input_leaves_state_untouched_and_listener_silent() {
    init_tracing();

    let mut picker = ColorPicker::new(PickerOptions::default()).unwrap();
    let calls = Rc::new(RefCell::new(0));

    picker.on_change({
        let calls = calls.clone();
        move |_| *calls.borrow_mut() += 1
    });

    for bad in ["#ff00", "red", "gggggg", "#ff00001", ""] {
        picker.set_color(bad, Origin::Hex);
    }

    assert_eq!(picker.get_color().hex, "#ff0000");
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn listener_receives_the_emitted_snapshot() {
    let mut picker = ColorPicker::new(PickerOptions::default()).unwrap();
    let received: Rc<RefCell<Vec<Color>>> = Rc::new(RefCell::new(Vec::new()));

    picker.on_change({
        let received = received.clone();
        move |color| received.borrow_mut().push(color.clone())
    });

    picker.set_color("#336699", Origin::Canvas);

    let received = received.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0], picker.get_color());
    assert_eq!((received[0].rgb.r, received[0].rgb.g, received[0].rgb.b), (51, 102, 153));
    assert_eq!((received[0].hsl.h, received[0].hsl.s, received[0].hsl.l), (210, 50, 40));
}

#[test]
fn last_listener_registration_wins() {
    let mut picker = ColorPicker::new(PickerOptions::default()).unwrap();
    let first = Rc::new(RefCell::new(0));
    let second = Rc::new(RefCell::new(0));

    picker.on_change({
        let first = first.clone();
        move |_| *first.borrow_mut() += 1
    });
    picker.on_change({
        let second = second.clone();
        move |_| *second.borrow_mut() += 1
    });

    picker.set_color("#123456", Origin::Hex);

    assert_eq!(*first.borrow(), 0);
    assert_eq!(*second.borrow(), 1);
}

#[test]
fn update_origin_is_suppressed_in_bindings() {
    let options = PickerOptions {
        show_hsl: true,
        ..PickerOptions::default()
    };
    let mut picker = ColorPicker::new(options).unwrap();

    let (hex_binding, hex_seen) = recording_binding(Origin::Hex);
    let (rgb_binding, rgb_seen) = recording_binding(Origin::Rgb);
    let (hsl_binding, hsl_seen) = recording_binding(Origin::Hsl);
    picker.register_binding(hex_binding);
    picker.register_binding(rgb_binding);
    picker.register_binding(hsl_binding);

    let fired = Rc::new(RefCell::new(0));
    picker.on_change({
        let fired = fired.clone();
        move |_| *fired.borrow_mut() += 1
    });

    picker.set_color("#00ff00", Origin::Rgb);

    assert_eq!(*hex_seen.borrow(), vec!["#00ff00".to_owned()]);
    assert_eq!(*hsl_seen.borrow(), vec!["#00ff00".to_owned()]);
    assert!(rgb_seen.borrow().is_empty());
    assert_eq!(*fired.borrow(), 1);
}

#[test]
fn hidden_representations_are_never_refreshed() {
    // show_hsl defaults to false.
    let mut picker = ColorPicker::new(PickerOptions::default()).unwrap();

    let (hsl_binding, hsl_seen) = recording_binding(Origin::Hsl);
    let (canvas_binding, canvas_seen) = recording_binding(Origin::Canvas);
    picker.register_binding(hsl_binding);
    picker.register_binding(canvas_binding);

    picker.set_color("#00ff00", Origin::Hex);

    assert!(hsl_seen.borrow().is_empty());
    assert_eq!(*canvas_seen.borrow(), vec!["#00ff00".to_owned()]);
}

#[test]
fn canvas_binding_repaints_even_on_canvas_origin_updates() {
    let mut picker = ColorPicker::new(PickerOptions::default()).unwrap();

    let (canvas_binding, canvas_seen) = recording_binding(Origin::Canvas);
    let (rgb_binding, rgb_seen) = recording_binding(Origin::Rgb);
    picker.register_binding(canvas_binding);
    picker.register_binding(rgb_binding);

    // A drag-sampled pick comes in tagged with the surface's own origin;
    // the surface still repaints, only same-representation inputs are
    // suppressed.
    picker.set_color("#00ff00", Origin::Canvas);

    assert_eq!(*canvas_seen.borrow(), vec!["#00ff00".to_owned()]);
    assert_eq!(*rgb_seen.borrow(), vec!["#00ff00".to_owned()]);
}

#[test]
fn get_color_is_idempotent_and_returns_fresh_snapshots() {
    let mut picker = ColorPicker::new(PickerOptions::default()).unwrap();
    picker.set_color("#808080", Origin::Hex);

    let first = picker.get_color();
    let second = picker.get_color();

    assert_eq!(first, second);
    assert_eq!((first.hsl.h, first.hsl.s, first.hsl.l), (0, 0, 50));
}

#[test]
fn snapshot_serializes_to_the_documented_shape() {
    let picker = ColorPicker::new(PickerOptions::default()).unwrap();
    let json = serde_json::to_value(picker.get_color()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "hex": "#ff0000",
            "rgb": { "r": 255, "g": 0, "b": 0 },
            "hsl": { "h": 0, "s": 100, "l": 50 },
        })
    );
}
