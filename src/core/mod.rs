//! Core-Domänentypen: Modellkatalog, Gesten, Szenen-Registry, Video, Geräte-Check.

pub mod asset;
pub mod capability;
pub mod gesture;
pub mod look_rotation;
pub mod scene_registry;
pub mod selection_list;
pub mod video;

pub use asset::{default_catalog, load_catalog_from_file, parse_catalog, AssetId, ModelEntry};
pub use capability::{check_device_supported, CapabilityError, DeviceCapabilities};
pub use gesture::{GestureClassifier, TapOutcome};
pub use look_rotation::{face_towards, look_rotation};
pub use scene_registry::{NodeId, PlacedNode, RegistryError, SceneNodeRegistry, ToggleOutcome};
pub use selection_list::{SelectionChange, SelectionError, SelectionList};
pub use video::{video_node_scale, PlacedVideo, VideoSession};
