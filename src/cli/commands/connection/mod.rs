mod create;
mod edit;
pub mod edits;
mod new;
mod show;
mod update;

use std::sync::Arc;

pub use create::CreateCommand;
pub use edit::EditCommand;
pub use new::NewCommand;
pub use show::ShowCommand;
pub use update::UpdateCommand;

use edits::{EditableForm, parse_edits};

use crate::{
    cli::{
        CliContext, CliError, CommandRegistry, CommandResult,
        types::{ArgType, CommandArg},
    },
    dialogs::{Dialog, DialogVariant, OpenVpnForm, PppoeForm, WireguardForm},
    services::network_manager::{ConnectionRef, DeviceRef, NetworkModel},
    settings::Settings,
};

/// Registers the `connection` commands.
pub fn register_commands(registry: &mut CommandRegistry, context: &Arc<CliContext>) {
    const CATEGORY_NAME: &str = "connection";

    registry.register_command(CATEGORY_NAME, Box::new(NewCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(EditCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(CreateCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(UpdateCommand::new(context.clone())));
}

/// What to do with the dialog once the edits are in.
pub(crate) enum Finish<'a> {
    /// Print the merged profile.
    Preview,
    /// Submit through the model.
    Submit(&'a dyn NetworkModel),
}

/// A dialog about to be opened from the command line.
pub(crate) struct DialogRun<'a> {
    pub variant: DialogVariant,
    pub settings: Settings,
    pub connection: Option<ConnectionRef>,
    pub device: Option<DeviceRef>,
    pub parent_choices: Vec<String>,
    pub edits: &'a [String],
}

impl DialogRun<'_> {
    pub(crate) async fn run(self, finish: Finish<'_>) -> CommandResult {
        match self.variant {
            DialogVariant::OpenVpn => self.drive::<OpenVpnForm>(finish).await,
            DialogVariant::Wireguard => self.drive::<WireguardForm>(finish).await,
            DialogVariant::Pppoe => self.drive::<PppoeForm>(finish).await,
        }
    }

    async fn drive<F>(self, finish: Finish<'_>) -> CommandResult
    where
        F: EditableForm + Send + Sync,
        F::Message: Send,
    {
        let messages = parse_edits::<F>(self.edits)?;
        let mut dialog = Dialog::<F>::open(
            self.settings,
            self.connection,
            self.device,
            self.parent_choices,
        )?;
        for message in messages {
            dialog.send(message);
        }

        match finish {
            Finish::Preview => Ok(dialog.merged()?.to_json_pretty()?),
            Finish::Submit(model) => {
                let outcome = dialog.submit(model).await;
                if outcome.closed {
                    Ok(format!(
                        "Saved {} for '{}'",
                        dialog.title(),
                        dialog.form().interface_name()
                    ))
                } else {
                    Err(CliError::Rejected(
                        dialog.error().unwrap_or("unknown error").to_string(),
                    ))
                }
            }
        }
    }
}

pub(crate) fn parse_variant(arg: &str) -> Result<DialogVariant, CliError> {
    arg.parse().map_err(|reason| CliError::InvalidArgument {
        arg: "variant".to_string(),
        reason,
    })
}

pub(crate) fn variant_arg() -> CommandArg {
    CommandArg {
        name: "variant".to_string(),
        description: "Dialog: openvpn, wireguard or pppoe".to_string(),
        required: true,
        variadic: false,
        value_type: ArgType::Variant,
    }
}

pub(crate) fn edits_arg() -> CommandArg {
    CommandArg {
        name: "edits".to_string(),
        description: "Form edits applied in order, e.g. name=wg1 peer+ peer.0.endpoint=host:51820"
            .to_string(),
        required: false,
        variadic: true,
        value_type: ArgType::Edit,
    }
}
