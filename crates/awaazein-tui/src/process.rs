//! Message processing

use awaazein_app::handler;
use awaazein_app::message::Message;
use awaazein_app::state::AppState;

/// Process a message through the TEA update function, following up any
/// messages it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}
