use serde::Serialize;

use super::rules::StatusCategory;

/// Border applied to badges of the viewer's own units, regardless of status.
pub const OWN_UNIT_BORDER: &str =
    "border-blue-500 dark:border-blue-400 ring-2 ring-blue-200 dark:ring-blue-800";

/// Presentation tokens for one status category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub label: &'static str,
    pub class_name: &'static str,
    pub border_class: &'static str,
}

impl StatusStyle {
    pub fn of(category: StatusCategory) -> &'static StatusStyle {
        match category {
            StatusCategory::Dispatched => &DISPATCHED,
            StatusCategory::Enroute => &ENROUTE,
            StatusCategory::OnScene => &ON_SCENE,
            StatusCategory::Transporting => &TRANSPORTING,
            StatusCategory::Available => &AVAILABLE,
            StatusCategory::Clear => &CLEAR,
        }
    }

    /// Border for a badge, upgraded when the unit belongs to the viewer.
    pub fn border_for(&self, is_own_unit: bool) -> &'static str {
        if is_own_unit {
            OWN_UNIT_BORDER
        } else {
            self.border_class
        }
    }
}

static DISPATCHED: StatusStyle = StatusStyle {
    label: "Dispatched",
    class_name: "bg-yellow-100 dark:bg-yellow-900/20 text-yellow-800 dark:text-yellow-200",
    border_class: "border-yellow-300 dark:border-yellow-600",
};

static ENROUTE: StatusStyle = StatusStyle {
    label: "Enroute",
    class_name: "bg-green-100 dark:bg-green-900/20 text-green-800 dark:text-green-200",
    border_class: "border-green-300 dark:border-green-600",
};

static ON_SCENE: StatusStyle = StatusStyle {
    label: "On Scene",
    class_name: "bg-red-100 dark:bg-red-900/20 text-red-800 dark:text-red-200",
    border_class: "border-red-300 dark:border-red-600",
};

static TRANSPORTING: StatusStyle = StatusStyle {
    label: "Transport",
    class_name: "bg-orange-100 dark:bg-orange-900/20 text-orange-800 dark:text-orange-200",
    border_class: "border-orange-300 dark:border-orange-600",
};

static AVAILABLE: StatusStyle = StatusStyle {
    label: "Available",
    class_name: "bg-gray-100 dark:bg-gray-600 text-gray-800 dark:text-gray-200",
    border_class: "border-gray-300 dark:border-gray-500",
};

static CLEAR: StatusStyle = StatusStyle {
    label: "Cleared",
    class_name: "bg-gray-100 dark:bg-gray-600 text-gray-800 dark:text-gray-200",
    border_class: "border-gray-300 dark:border-gray-500",
};
