use std::sync::{
    Once,
    atomic::{AtomicBool, Ordering},
};

use log::{info, warn};

static RECEIVED_CTRL_C: AtomicBool = AtomicBool::new(false);
static INSTALL_HANDLER: Once = Once::new();

/// Installs a handler for SIGINT/SIGTERM. Afterwards, [`received_ctrl_c`] reports whether
/// the user asked us to stop; the iterative algorithms poll it between two steps and
/// return their best known solution. Calling this function repeatedly is a no-op.
pub fn initialize() {
    INSTALL_HANDLER.call_once(|| {
        let result = ctrlc::set_handler(|| {
            info!("Received termination signal; stopping at next opportunity");
            RECEIVED_CTRL_C.store(true, Ordering::Release);
        });

        if let Err(e) = result {
            warn!("Could not install signal handler: {e}");
        }
    });
}

/// Returns true if a termination signal was received since [`initialize`]
pub fn received_ctrl_c() -> bool {
    RECEIVED_CTRL_C.load(Ordering::Acquire)
}
