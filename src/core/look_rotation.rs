//! Look-Rotation: richtet die lokale +Z-Achse eines Nodes auf eine Richtung aus.

use glam::{Mat3, Quat, Vec3};

/// Berechnet eine Rotation, deren lokale +Z-Achse entlang `forward` zeigt
/// und deren +Y-Achse so nah wie möglich an `up` liegt.
///
/// Gibt `None` zurück, wenn `forward` degeneriert ist (Länge 0 oder
/// parallel zu `up`).
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let forward = forward.try_normalize()?;
    let right = up.cross(forward).try_normalize()?;
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
}

/// Rotation, mit der ein Node an `node_pos` die Kamera an `camera_pos` ansieht.
pub fn face_towards(node_pos: Vec3, camera_pos: Vec3) -> Option<Quat> {
    look_rotation(camera_pos - node_pos, Vec3::Y)
}
