//! Form edits given on the command line.
//!
//! Each argument is one edit, applied in order:
//!
//! ```text
//! name=<iface>                 interface and profile name
//! private_key=<key>            tunnel private key
//! peer+                        append an empty peer
//! peer-<i>                     remove peer <i>
//! peer.<i>.<field>=<value>     public_key, endpoint or allowed_ips of peer <i>
//! parent=<iface>               PPPoE parent interface
//! username= / password= / service=
//! lcp_echo_failure=<n> / lcp_echo_interval=<n>
//! ```

use std::str::FromStr;

use crate::{
    cli::CliError,
    dialogs::{
        ConnectionForm, OpenVpnForm, OpenVpnMessage, PppoeForm, PppoeMessage, WireguardForm,
        WireguardMessage, peers::PeerField,
    },
};

/// One parsed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// `name=`
    Name(String),
    /// `private_key=`
    PrivateKey(String),
    /// `peer+`
    AddPeer,
    /// `peer-<i>`
    RemovePeer(usize),
    /// `peer.<i>.<field>=`
    Peer {
        /// Row
        index: usize,
        /// Column
        field: PeerField,
        /// New text
        value: String,
    },
    /// `parent=`
    Parent(String),
    /// `username=`
    Username(String),
    /// `password=`
    Password(String),
    /// `service=`
    Service(String),
    /// `lcp_echo_failure=`
    LcpEchoFailure(String),
    /// `lcp_echo_interval=`
    LcpEchoInterval(String),
}

fn invalid(edit: &str, reason: impl Into<String>) -> CliError {
    CliError::InvalidArgument {
        arg: edit.to_string(),
        reason: reason.into(),
    }
}

fn parse_index(edit: &str, index: &str) -> Result<usize, CliError> {
    index
        .parse()
        .map_err(|_| invalid(edit, format!("'{index}' is not a peer index")))
}

impl FromStr for Edit {
    type Err = CliError;

    fn from_str(edit: &str) -> Result<Self, Self::Err> {
        if edit == "peer+" {
            return Ok(Edit::AddPeer);
        }
        if let Some(index) = edit.strip_prefix("peer-") {
            return Ok(Edit::RemovePeer(parse_index(edit, index)?));
        }

        let (key, value) = edit
            .split_once('=')
            .ok_or_else(|| invalid(edit, "expected key=value, peer+ or peer-<index>"))?;
        let value = value.to_string();

        if let Some(rest) = key.strip_prefix("peer.") {
            let (index, field) = rest
                .split_once('.')
                .ok_or_else(|| invalid(edit, "expected peer.<index>.<field>=<value>"))?;
            let field = PeerField::try_from(field).map_err(|reason| invalid(edit, reason))?;
            return Ok(Edit::Peer {
                index: parse_index(edit, index)?,
                field,
                value,
            });
        }

        match key {
            "name" => Ok(Edit::Name(value)),
            "private_key" => Ok(Edit::PrivateKey(value)),
            "parent" => Ok(Edit::Parent(value)),
            "username" => Ok(Edit::Username(value)),
            "password" => Ok(Edit::Password(value)),
            "service" => Ok(Edit::Service(value)),
            "lcp_echo_failure" => Ok(Edit::LcpEchoFailure(value)),
            "lcp_echo_interval" => Ok(Edit::LcpEchoInterval(value)),
            other => Err(invalid(edit, format!("unknown field '{other}'"))),
        }
    }
}

/// Forms that can be driven by [`Edit`]s.
pub trait EditableForm: ConnectionForm {
    /// The message for `edit`, or `None` when this dialog has no such field.
    fn message(edit: Edit) -> Option<Self::Message>;
}

impl EditableForm for OpenVpnForm {
    fn message(edit: Edit) -> Option<OpenVpnMessage> {
        match edit {
            Edit::Name(name) => Some(OpenVpnMessage::NameChanged(name)),
            Edit::PrivateKey(key) => Some(OpenVpnMessage::PrivateKeyChanged(key)),
            Edit::AddPeer => Some(OpenVpnMessage::PeerAdded),
            Edit::RemovePeer(index) => Some(OpenVpnMessage::PeerRemoved(index)),
            Edit::Peer {
                index,
                field,
                value,
            } => Some(OpenVpnMessage::PeerEdited {
                index,
                field,
                value,
            }),
            _ => None,
        }
    }
}

impl EditableForm for WireguardForm {
    fn message(edit: Edit) -> Option<WireguardMessage> {
        match edit {
            Edit::Name(name) => Some(WireguardMessage::NameChanged(name)),
            Edit::PrivateKey(key) => Some(WireguardMessage::PrivateKeyChanged(key)),
            Edit::AddPeer => Some(WireguardMessage::PeerAdded),
            Edit::RemovePeer(index) => Some(WireguardMessage::PeerRemoved(index)),
            Edit::Peer {
                index,
                field,
                value,
            } => Some(WireguardMessage::PeerEdited {
                index,
                field,
                value,
            }),
            _ => None,
        }
    }
}

impl EditableForm for PppoeForm {
    fn message(edit: Edit) -> Option<PppoeMessage> {
        match edit {
            Edit::Name(name) => Some(PppoeMessage::NameChanged(name)),
            Edit::Parent(parent) => Some(PppoeMessage::ParentSelected(parent)),
            Edit::Username(username) => Some(PppoeMessage::UsernameChanged(username)),
            Edit::Password(password) => Some(PppoeMessage::PasswordChanged(password)),
            Edit::Service(service) => Some(PppoeMessage::ServiceChanged(service)),
            Edit::LcpEchoFailure(count) => Some(PppoeMessage::LcpEchoFailureChanged(count)),
            Edit::LcpEchoInterval(seconds) => Some(PppoeMessage::LcpEchoIntervalChanged(seconds)),
            _ => None,
        }
    }
}

/// Parses `args` into messages for `F`.
///
/// # Errors
/// Returns `CliError::InvalidArgument` for malformed edits or fields the
/// dialog does not have.
pub fn parse_edits<F: EditableForm>(args: &[String]) -> Result<Vec<F::Message>, CliError> {
    args.iter()
        .map(|arg| {
            let edit: Edit = arg.parse()?;
            F::message(edit).ok_or_else(|| {
                invalid(arg, format!("not a field of the {} dialog", F::ID_PREFIX))
            })
        })
        .collect()
}
