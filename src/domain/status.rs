// ==========================================
// Система управления логистикой - status vocabulary
// ==========================================
// Closed-ish set of status data values and their visual
// classification. Unknown values degrade to the neutral category;
// they are never an error.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// Canonical status data values (wire strings, kept verbatim).
pub const FULFILLED: &str = "обеспечен";
pub const FULFILLED_3_OF_10: &str = "обеспечен 3 из 10";
pub const FULFILLED_ADJUSTED: &str = "обеспечен с корректировкой";
pub const FULFILLED_ADJUSTED_BY_CONSTRAINT: &str = "обеспечен, с корректировкой по ограничениям";
pub const UNFULFILLED_BY_CONSTRAINT: &str = "не обеспечен, по ограничениям";
pub const UNASSIGNED: &str = "не распределен";
pub const TIMING_LATER: &str = "ПОЗЖЕ";
pub const TIMING_EQUAL: &str = "РАВНО";
pub const TIMING_EARLIER: &str = "РАНЬШЕ";
pub const UNLOADING_PLUS_3: &str = "выгрузка +3";
pub const UNLOADING_PLUS_3_PLANNED: &str = "выгрузка +3, плановая";

/// Note value written by the accept operations.
pub const NOTE_ACCEPTED: &str = "принят";

/// Substring marker used by the bulk accept: any status containing
/// it is forced to "выгрузка +3". Deliberately also matches
/// "не обеспечен, по ограничениям" (historical behavior).
pub const FULFILLED_MARKER: &str = "обеспечен";

// ==========================================
// Visual category
// ==========================================

/// Visual category of a status badge. `Other` is the neutral default
/// for unknown values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusCategory {
    Fulfilled,
    Adjusted,
    Unfulfilled,
    Unassigned,
    Later,
    Equal,
    Earlier,
    Unloading,
    Other,
}

impl StatusCategory {
    /// Badge styling classes historically used by the board UI.
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusCategory::Fulfilled | StatusCategory::Equal => {
                "bg-green-100 text-green-800 border-green-200"
            }
            StatusCategory::Adjusted | StatusCategory::Earlier => {
                "bg-yellow-100 text-yellow-800 border-yellow-200"
            }
            StatusCategory::Unfulfilled => "bg-red-100 text-red-800 border-red-200",
            StatusCategory::Unassigned => "bg-blue-100 text-blue-800 border-blue-200",
            StatusCategory::Later => "bg-orange-100 text-orange-800 border-orange-200",
            StatusCategory::Unloading => "bg-purple-100 text-purple-800 border-purple-200",
            StatusCategory::Other => "bg-gray-100 text-gray-800 border-gray-200",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCategory::Fulfilled => "fulfilled",
            StatusCategory::Adjusted => "adjusted",
            StatusCategory::Unfulfilled => "unfulfilled",
            StatusCategory::Unassigned => "unassigned",
            StatusCategory::Later => "later",
            StatusCategory::Equal => "equal",
            StatusCategory::Earlier => "earlier",
            StatusCategory::Unloading => "unloading",
            StatusCategory::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Classify a status value. Pure lookup; unknown input maps to
/// `StatusCategory::Other`.
pub fn classify(status: &str) -> StatusCategory {
    match status {
        FULFILLED | FULFILLED_3_OF_10 => StatusCategory::Fulfilled,
        FULFILLED_ADJUSTED | FULFILLED_ADJUSTED_BY_CONSTRAINT => StatusCategory::Adjusted,
        UNFULFILLED_BY_CONSTRAINT => StatusCategory::Unfulfilled,
        UNASSIGNED => StatusCategory::Unassigned,
        TIMING_LATER => StatusCategory::Later,
        TIMING_EQUAL => StatusCategory::Equal,
        TIMING_EARLIER => StatusCategory::Earlier,
        UNLOADING_PLUS_3 | UNLOADING_PLUS_3_PLANNED => StatusCategory::Unloading,
        _ => StatusCategory::Other,
    }
}

/// Shortened display name for chart axes and narrow badges.
pub fn short_label(status: &str) -> &str {
    match status {
        FULFILLED_ADJUSTED_BY_CONSTRAINT | FULFILLED_ADJUSTED => "обеспечен с корр.",
        UNFULFILLED_BY_CONSTRAINT => "не обеспечен",
        UNLOADING_PLUS_3_PLANNED => "выгрузка +3",
        FULFILLED_3_OF_10 => "обеспечен 3/10",
        other => other,
    }
}
