pub use actions::{
    ActionSet, AutoloadAction, CheckAction, InstallAction, JsonAction, RemoveAction, RequireAction,
    SearchAction, ShowAction, UpdateAction,
};
pub use extensions::{ExtensionCollaborator, ExtensionDescriptor, InstallKind};
pub use network::{HttpNetwork, NetworkOperations, ProbeResponse};

pub mod actions;
pub mod extensions;
pub mod network;
