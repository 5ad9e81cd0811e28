pub mod fixtures;

use cardwright::{HostEvent, Toolbox};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Routes resolver log output through the test harness. Run tests with
/// `RUST_LOG=debug` to see merge traces.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Toolbox loaded with the shared deck fixture.
pub fn deck_toolbox() -> Toolbox {
    init_logging();
    Toolbox::from_source(fixtures::DECK).expect("fixture blueprint must load")
}

/// Short name of a recorded host call, for order assertions.
pub fn event_kind(event: &HostEvent) -> &'static str {
    match event {
        HostEvent::CreateImage(_) => "create_image",
        HostEvent::FillMonochrome(_) => "fill_monochrome",
        HostEvent::LoadDataImage(_) => "load_data_image",
        HostEvent::ImportLayer(_) => "import_layer",
        HostEvent::CreateGroup(_) => "create_group",
        HostEvent::DrawText(_) => "draw_text",
        HostEvent::SelectRectangle(_) => "select_rectangle",
        HostEvent::ApplyMask(_) => "apply_mask",
        HostEvent::ImportPalette { .. } => "import_palette",
        HostEvent::DisplayImage => "display_image",
        HostEvent::SaveImage => "save_image",
    }
}

/// Kinds of all recorded calls, in order.
pub fn event_kinds(events: &[HostEvent]) -> Vec<&'static str> {
    events.iter().map(event_kind).collect()
}
