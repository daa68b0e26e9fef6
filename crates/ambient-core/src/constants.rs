// Shared tuning constants for the particle field and the cursor layer.
//
// These were tuned by eye; treat them as defaults for `FieldTuning` and
// `CursorTuning`, not as hard requirements.

// Device classification
pub const MOBILE_BREAKPOINT: f32 = 768.0; // logical px; narrower viewports count as mobile

// Particle population
pub const DESKTOP_PARTICLE_COUNT: usize = 70;
pub const MOBILE_PARTICLE_COUNT: usize = 30; // fewer particles on phones to save battery
pub const MAX_PARTICLE_RADIUS: f32 = 2.0;

// Connections
pub const DESKTOP_CONNECTION_DISTANCE: f32 = 160.0;
pub const MOBILE_CONNECTION_DISTANCE: f32 = 100.0;
pub const EDGE_MAX_ALPHA: f32 = 0.15; // opacity of an edge between coincident particles
pub const EDGE_LINE_WIDTH: f32 = 0.5;

// Speed (logical px per frame)
pub const DEV_BASE_SPEED: f32 = 0.3;
pub const CLINIC_BASE_SPEED: f32 = 0.6;
pub const MOBILE_SPEED_FACTOR: f32 = 0.5;

// Particle fill
pub const PARTICLE_ALPHA: f32 = 0.5;

// Accent palette (sRGB 0..255)
pub const DEV_ACCENT_RGB: [u8; 3] = [6, 182, 212]; // cyan
pub const CLINIC_ACCENT_RGB: [u8; 3] = [251, 191, 36]; // gold

// Resize coalescing
pub const RESIZE_DEBOUNCE_MS: u64 = 200;

// Fallback viewport when the platform cannot report one (desktop class)
pub const FALLBACK_VIEWPORT: [f32; 2] = [1280.0, 800.0];

// Cursor halo
pub const HALO_DIAMETER: f32 = 20.0;
pub const HALO_HOVER_DIAMETER: f32 = 40.0;
pub const HALO_OPACITY: f32 = 0.3;
pub const HALO_HOVER_OPACITY: f32 = 1.0;
pub const HALO_HOVER_FILL_ALPHA: f32 = 0.1;

// Off-screen start position for the pointer before the first move
pub const POINTER_PARKED: [f32; 2] = [-100.0, -100.0];

// Position spring (halo trailing the pointer), critically damped
pub const POSITION_SPRING_STIFFNESS: f32 = 700.0;
pub const POSITION_SPRING_DAMPING: f32 = 52.915_026; // 2 * sqrt(700 * 1)

// Appearance spring (halo size/opacity/fill)
pub const APPEARANCE_SPRING_STIFFNESS: f32 = 400.0;
pub const APPEARANCE_SPRING_DAMPING: f32 = 28.0;

pub const SPRING_MASS: f32 = 1.0;

// Integration limits
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_DT_SEC: f32 = 0.1; // after a background tab, don't replay seconds of motion
pub const SPRING_REST_DELTA: f32 = 0.001;
pub const SPRING_REST_SPEED: f32 = 0.01;
