//! Custom IDs shared between the components the bot renders and the handlers
//! that receive them.

pub const CONFIG_COMMAND: &str = "config";
pub const SETUP_COMMAND: &str = "setup";

pub const CONFIG_SELECT_ID: &str = "config_select";
/// Prefix of config modal IDs; the category value follows it.
pub const CONFIG_MODAL_PREFIX: &str = "config_modal_";

pub const VERIFY_BUTTON_ID: &str = "verify_button";
pub const VERIFICATION_MODAL_ID: &str = "verification_modal";
pub const PASSWORD_INPUT_ID: &str = "password_input";
