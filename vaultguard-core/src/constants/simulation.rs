//! Simulator Parameters
//!
//! Values are per tick. The model is tuned for the 1 Hz live cycle; bulk
//! history reuses the same step at coarser spacing, which is why the week
//! series looks calmer than it would in real time.

// ===== NOISE =====

/// Scale of the per-tick temperature noise (°C).
pub const TEMP_NOISE_C: f32 = 0.03;

/// Scale of the per-tick humidity noise (%).
pub const HUMIDITY_NOISE_PCT: f32 = 0.08;

/// Scale of the noise on the moisture target (%).
pub const MOISTURE_NOISE_PCT: f32 = 0.05;

/// Scale of the per-tick vibration noise.
pub const VIBRATION_NOISE: f32 = 0.005;

// ===== DRIFT =====

/// Temperature drift per tick in at-risk mode (°C).
pub const AT_RISK_TEMP_DRIFT_C: f32 = 0.004;

/// Humidity drift per tick in at-risk mode (%).
pub const AT_RISK_HUMIDITY_DRIFT_PCT: f32 = 0.02;

/// Temperature drift per tick in remediation mode (°C).
///
/// Negative: conditions are expected to be pulled back.
pub const REMEDIATION_TEMP_DRIFT_C: f32 = -0.002;

/// Humidity drift per tick in remediation mode (%).
pub const REMEDIATION_HUMIDITY_DRIFT_PCT: f32 = -0.01;

// ===== ACTUATOR COUPLING =====

/// Fraction of the temperature bias applied each tick.
pub const TEMP_BIAS_GAIN: f32 = 0.02;

/// Fraction of the humidity bias applied each tick.
pub const HUMIDITY_BIAS_GAIN: f32 = 0.03;

/// Humidity removed per tick at full airflow boost (%).
pub const AIRFLOW_HUMIDITY_GAIN: f32 = -0.03;

/// Bias step of one ADJUST_TEMP_* action (°C).
pub const TEMP_ACTION_STEP_C: f32 = 0.15;

/// Bias step of one DEHUMIDIFY / HUMIDIFY action (%).
pub const HUMIDITY_ACTION_STEP_PCT: f32 = 0.4;

/// Airflow added by one DEHUMIDIFY action.
pub const DEHUMIDIFY_AIRFLOW_STEP: f32 = 0.2;

/// Airflow added by one TRIGGER_AIRFLOW action.
pub const AIRFLOW_ACTION_STEP: f32 = 0.25;

// ===== MOISTURE =====

/// Moisture target shift per % of humidity away from the safe midpoint.
pub const MOISTURE_HUMIDITY_COUPLING: f32 = 0.04;

/// First-order smoothing rate of moisture toward its target, per tick.
pub const MOISTURE_RELAXATION_RATE: f32 = 0.02;

// ===== DOOR =====

/// Chance per tick that a closed door opens, normal mode.
pub const DOOR_OPEN_CHANCE_NORMAL: f32 = 0.01;

/// Chance per tick that a closed door opens, at-risk mode.
pub const DOOR_OPEN_CHANCE_AT_RISK: f32 = 0.03;

/// Chance per tick that a closed door opens, remediation mode.
pub const DOOR_OPEN_CHANCE_REMEDIATION: f32 = 0.05;

/// Chance per tick that an open door closes. Open states are short-lived.
pub const DOOR_CLOSE_CHANCE: f32 = 0.08;

/// Door-open timestamps kept for the trailing hour.
///
/// Every open follows a close and toggles are 10 s apart, so at most
/// 180 opens fit in an hour.
pub const DOOR_OPEN_WINDOW_CAPACITY: usize = 512;

// ===== VIBRATION =====

/// Vibration kept from one tick to the next.
pub const VIBRATION_DECAY: f32 = 0.85;

/// Chance per tick of a vibration bump, normal mode.
pub const VIBRATION_BUMP_CHANCE_NORMAL: f32 = 0.01;

/// Chance per tick of a vibration bump, at-risk mode.
pub const VIBRATION_BUMP_CHANCE_AT_RISK: f32 = 0.02;

/// Chance per tick of a vibration bump, remediation mode.
pub const VIBRATION_BUMP_CHANCE_REMEDIATION: f32 = 0.03;

/// Smallest vibration bump.
pub const VIBRATION_BUMP_MIN: f32 = 0.15;

/// Largest vibration bump.
pub const VIBRATION_BUMP_MAX: f32 = 0.45;

// ===== INITIAL OFFSETS =====
//
// Drawn uniformly from [min, max] when the simulator (re)initialises.

/// Normal mode temperature offset half-width (°C), symmetric.
pub const NORMAL_TEMP_OFFSET_C: f32 = 0.3;

/// Normal mode humidity offset half-width (%), symmetric.
pub const NORMAL_HUMIDITY_OFFSET_PCT: f32 = 1.0;

/// Normal mode moisture offset half-width (%), symmetric.
pub const NORMAL_MOISTURE_OFFSET_PCT: f32 = 0.3;

/// At-risk temperature offset range (°C).
pub const AT_RISK_TEMP_OFFSET_C: (f32, f32) = (1.0, 2.0);

/// At-risk humidity offset range (%).
pub const AT_RISK_HUMIDITY_OFFSET_PCT: (f32, f32) = (4.0, 8.0);

/// At-risk moisture offset range (%).
pub const AT_RISK_MOISTURE_OFFSET_PCT: (f32, f32) = (0.5, 1.5);

/// Remediation temperature offset range (°C).
pub const REMEDIATION_TEMP_OFFSET_C: (f32, f32) = (4.5, 6.0);

/// Remediation humidity offset range (%).
pub const REMEDIATION_HUMIDITY_OFFSET_PCT: (f32, f32) = (8.0, 14.0);

/// Remediation moisture offset range (%).
pub const REMEDIATION_MOISTURE_OFFSET_PCT: (f32, f32) = (2.5, 3.5);

// ===== OUTPUT PRECISION =====

/// Decimal places for temperature in a reading.
pub const TEMP_DECIMALS: u32 = 2;

/// Decimal places for humidity in a reading.
pub const HUMIDITY_DECIMALS: u32 = 2;

/// Decimal places for moisture in a reading.
pub const MOISTURE_DECIMALS: u32 = 2;

/// Decimal places for vibration in a reading.
pub const VIBRATION_DECIMALS: u32 = 3;
