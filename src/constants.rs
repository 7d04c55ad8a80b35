// DOM, gesture and GPU budget constants for the web front-end.
// Kept free of web and GPU types so host tests can `include!` this file.

// Element ids
pub const ROOT_ID: &str = "app-root";
pub const CANVAS_ID: &str = "app-canvas";
pub const PLANNER_SECTION_ID: &str = "raumplaner";
pub const DETAILS_SECTION_ID: &str = "details";
pub const CONTROL_PANEL_ID: &str = "control-panel";
pub const METRICS_PANEL_ID: &str = "metrics-panel";

// Class toggled on the active room button / material card
pub const ACTIVE_CLASS: &str = "is-active";

// Page copy
pub const BADGE_TEXT: &str = "Spatial Studio / Moderne Wohnung";
pub const HEADLINE_TEXT: &str = "Dein interaktiver 3D-Raumplaner für urbane Wohnungen";
pub const LEAD_TEXT: &str = "Entwerfe eine zeitgemäße, europäische Wohnung: Passe Maße, \
Materialien, Lichtstimmung und Möblierung in Echtzeit an und erhalte sofortige Kennzahlen \
zu Proportionen und Wohnqualität.";
pub const CTA_PLAN_TEXT: &str = "Direkt planen";
pub const CTA_DETAILS_TEXT: &str = "Architektur-Details";
pub const FOOTER_TEXT: &str = "Entwickelt für moderne europäische Lebensstile · Inspiriert \
von skandinavischer Klarheit & mediterraner Wärme.";

// Orbit gestures
pub const ROTATE_BUTTON: i16 = 0; // primary
pub const PAN_BUTTON: i16 = 2; // secondary
pub const WHEEL_LINE_PX: f32 = 16.0; // DOM_DELTA_LINE -> pixels

// GPU budgets
pub const MAX_SCENE_OBJECTS: usize = 16; // floor + 4 walls + zoning (3) + 5 furniture, with headroom
pub const UNIFORM_STRIDE: u64 = 256; // minUniformBufferOffsetAlignment
pub const HDR_EXPOSURE: f32 = 1.0;
