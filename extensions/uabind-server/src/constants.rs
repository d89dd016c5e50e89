/// First numeric identifier handed out to nodes created at runtime.
pub const FIRST_ASSIGNED_NODE_ID: u32 = 50_000;

pub const DEFAULT_APPLICATION_URI: &str = "urn:uabind:server";

pub const OBJECTS_FOLDER_BROWSE_NAME: &str = "Objects";
