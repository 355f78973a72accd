//=========================================================================
// Engine Systems
//=========================================================================
//
// Container for the systems living on the logic thread.
//
// Configured on the main thread through `Engine::init`, then moved to the
// logic thread where the orchestrator ticks it and hands it to the game
// tick callback.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, LogicalLayer};
use crate::core::resource::ResourceRegistry;

//=== EngineSystems =======================================================

/// Logic-thread systems.
///
/// # Available Systems
///
/// - `input`: trigger evaluation over paired input snapshots
/// - `resources`: per-type resource locator chains
pub struct EngineSystems<A: Action> {
    pub input: LogicalLayer<A>,
    pub resources: ResourceRegistry,
}

impl<A: Action> EngineSystems<A> {
    pub(crate) fn new() -> Self {
        Self {
            input: LogicalLayer::new(),
            resources: ResourceRegistry::new(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
