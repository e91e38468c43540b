//! Z-order re-sequencing.
//!
//! All four layer actions work on the panels sorted by current z-index
//! and finish by renormalizing every z-index to its 1-based position,
//! so the sequence stays contiguous and duplicate-free.

use uuid::Uuid;

use crate::model::Panel;

/// Layer movement applied to one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerAction {
    /// Swap with the panel directly behind.
    Back,
    /// Swap with the panel directly in front.
    Forward,
    /// Move behind every other panel.
    ToBack,
    /// Move in front of every other panel.
    ToFront,
}

/// Whether `action` would change anything. Boundary no-ops are rejected
/// here, before the caller snapshots, so null mutations never pollute
/// the undo history.
pub fn can_reorder(panels: &[Panel], target: Uuid, action: LayerAction) -> bool {
    let mut ordered: Vec<&Panel> = panels.iter().collect();
    ordered.sort_by_key(|p| p.z_index);
    let Some(index) = ordered.iter().position(|p| p.id == target) else {
        return false;
    };
    match action {
        LayerAction::Back | LayerAction::ToBack => index > 0,
        LayerAction::Forward | LayerAction::ToFront => index < ordered.len() - 1,
    }
}

/// Applies `action` to the panel with id `target` and renormalizes all
/// z-indices to 1..=N. Unknown target ids leave the panels untouched.
pub fn reorder(panels: &mut [Panel], target: Uuid, action: LayerAction) {
    let mut order: Vec<usize> = (0..panels.len()).collect();
    order.sort_by_key(|&i| panels[i].z_index);

    let Some(pos) = order.iter().position(|&i| panels[i].id == target) else {
        return;
    };

    match action {
        LayerAction::Back if pos > 0 => order.swap(pos, pos - 1),
        LayerAction::Forward if pos < order.len() - 1 => order.swap(pos, pos + 1),
        LayerAction::ToBack => {
            let i = order.remove(pos);
            order.insert(0, i);
        }
        LayerAction::ToFront => {
            let i = order.remove(pos);
            order.push(i);
        }
        _ => {}
    }

    for (rank, &i) in order.iter().enumerate() {
        panels[i].z_index = rank as i32 + 1;
    }
}
