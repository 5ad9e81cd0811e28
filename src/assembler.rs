//! Replaying a resolved layout against a host editor.
//!
//! Components are dispatched in lexical order of their names, so
//! blueprint authors control stacking by naming (`command01_image`,
//! `command02_background`, ...). Every record is decoded into a typed
//! command before the first host call, which keeps half-drawn images
//! from validation failures out of the host.

use crate::error::AssembleError;
use cardwright_blueprint::ResolvedLayout;
use cardwright_command::Command;
use cardwright_host::{HostEditor, HostError};

/// Decodes and dispatches every component of `layout` in order.
pub fn assemble_into<H>(host: &mut H, layout: &ResolvedLayout) -> Result<(), AssembleError>
where
    H: HostEditor + ?Sized,
{
    let commands = layout
        .iter()
        .map(|(name, record)| Ok((name, Command::from_record(name, record)?)))
        .collect::<Result<Vec<_>, AssembleError>>()?;

    for (name, command) in commands {
        log::debug!(
            "'{}': dispatching '{}' to host '{}'",
            name,
            command.kind(),
            host.name()
        );
        dispatch(host, &command)?;
    }
    Ok(())
}

/// Routes one command to the host call that implements it.
///
/// `hide` is the deliberate no-op: it exists so a card can switch off an
/// inherited component.
pub fn dispatch<H>(host: &mut H, command: &Command) -> Result<(), HostError>
where
    H: HostEditor + ?Sized,
{
    match command {
        Command::Image(spec) => host.create_image(spec),
        Command::Monochrome(spec) => host.fill_monochrome(spec),
        Command::ImportLayerLoad(spec) => host.load_data_image(spec),
        Command::ImportLayer(spec) => host.import_layer(spec),
        Command::Group(spec) => host.create_group(spec),
        Command::Text(spec) => host.draw_text(spec),
        Command::Select(spec) => host.select_rectangle(spec),
        Command::Mask(spec) => host.apply_mask(spec),
        Command::Hide => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardwright_blueprint::Blueprint;
    use cardwright_command::CommandError;
    use cardwright_host::{HostEvent, RecordingHost};

    const CARD: &str = r#"<data>
        <card>
            <a_image>
                <type>image</type>
                <size parse="tuple">400,600</size>
            </a_image>
            <b_fill>
                <type>monochrome</type>
                <size parse="tuple">400,600</size>
                <color>#204060</color>
            </b_fill>
            <c_hidden>
                <type>hide</type>
                <color>#ffffff</color>
            </c_hidden>
        </card>
    </data>"#;

    #[test]
    fn test_components_dispatch_in_lexical_order() {
        let layout = Blueprint::parse(CARD).unwrap().generate_layout("card").unwrap();
        let mut host = RecordingHost::new();
        assemble_into(&mut host, &layout).unwrap();

        let events = host.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], HostEvent::CreateImage(_)));
        assert!(matches!(events[1], HostEvent::FillMonochrome(_)));
    }

    #[test]
    fn test_hidden_components_reach_no_host_call() {
        let layout = Blueprint::parse(CARD).unwrap().generate_layout("card").unwrap();
        assert!(layout.contains_key("c_hidden"));

        let mut host = RecordingHost::new();
        assemble_into(&mut host, &layout).unwrap();
        let hidden_fill = host.events().iter().any(
            |event| matches!(event, HostEvent::FillMonochrome(spec) if spec.color == "#ffffff"),
        );
        assert!(!hidden_fill);
    }

    #[test]
    fn test_invalid_record_stops_before_any_host_call() {
        let source = r#"<data>
            <card>
                <a_image><type>image</type><size parse="tuple">1,2</size></a_image>
                <b_bad><type>monochrome</type></b_bad>
            </card>
        </data>"#;
        let layout = Blueprint::parse(source).unwrap().generate_layout("card").unwrap();

        let mut host = RecordingHost::new();
        let result = assemble_into(&mut host, &layout);
        assert!(matches!(
            result,
            Err(AssembleError::Command(CommandError::MissingField { field, .. })) if field == "size"
        ));
        assert!(host.events().is_empty());
    }

    #[test]
    fn test_dispatch_works_through_a_trait_object() {
        let layout = Blueprint::parse(CARD).unwrap().generate_layout("card").unwrap();
        let mut host = RecordingHost::new();
        let dyn_host: &mut dyn HostEditor = &mut host;
        assemble_into(dyn_host, &layout).unwrap();
        assert_eq!(host.events().len(), 2);
    }
}
