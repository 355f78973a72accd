//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_input::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineConfig};
pub use crate::core::EngineSystems;
pub use crate::core::platform_bridge::PlatformError;

// Input system
pub use crate::core::input::conditions::*;
pub use crate::core::input::{
    Action, ConditionExt, FocusError, FocusLatch, FocusSignalSource, InputContext, InputEvent,
    InputState, InputStatePair, InputTrigger, KeyCode, LogicalLayer, Modifiers, MouseButton,
    TriggerCondition,
};
pub use crate::platform::WinitFocusListener;

// Resources
pub use crate::core::resource::{
    MultiFormatResourceLocator, ResourceError, ResourceLocation, ResourceLocator,
    ResourceRegistry, ResourceType, SimpleResourceLocator,
};

// Threading
pub use crate::core::thread_guard::{ThreadError, ThreadGuard};
