//! Protocol constants
//!
//! These constants define the frame markers, device/command ids, response
//! codes, and other protocol-specific values used on the orb's Bluetooth
//! wire protocol.

// ============================================================================
// Frame Markers
// ============================================================================

/// First start-of-packet byte. Opens every frame in both directions.
pub const SOP1: u8 = 0xFF;
/// Second start-of-packet byte for command and synchronous response frames.
pub const SOP2_SYNC: u8 = 0xFF;
/// Second start-of-packet byte for asynchronous notification frames.
pub const SOP2_ASYNC: u8 = 0xFE;

// ============================================================================
// Device Ids (command routing, host → orb)
// ============================================================================

/// Core device: ping, sleep, power management.
pub const DID_CORE: u8 = 0x00;
/// Orb device: motion, LEDs, heading.
pub const DID_ORB: u8 = 0x02;

// ============================================================================
// Command Ids (host → orb)
// ============================================================================

/// No-op liveness probe (core).
pub const CID_PING: u8 = 0x01;
/// Enter deep sleep (core).
pub const CID_SLEEP: u8 = 0x22;
/// Set the inactivity timeout before auto-sleep (core).
pub const CID_SET_INACTIVITY_TIMEOUT: u8 = 0x25;
/// Set the RGB LED color (orb).
pub const CID_SET_RGB: u8 = 0x20;
/// Start or stop rolling at a speed and heading (orb).
pub const CID_ROLL: u8 = 0x30;

// ============================================================================
// Response Codes (orb → host, synchronous)
// ============================================================================

/// Command succeeded.
pub const MRSP_OK: u8 = 0x00;
/// Non-specific error.
pub const MRSP_GENERAL_ERROR: u8 = 0x01;
/// Received checksum failure.
pub const MRSP_CHECKSUM_FAILURE: u8 = 0x02;
/// Received command fragment.
pub const MRSP_FRAGMENT_ERROR: u8 = 0x03;
/// Unknown command id.
pub const MRSP_BAD_COMMAND: u8 = 0x04;
/// Command currently unsupported.
pub const MRSP_UNSUPPORTED: u8 = 0x05;
/// Bad message format.
pub const MRSP_BAD_MESSAGE_FORMAT: u8 = 0x06;
/// Parameter value invalid.
pub const MRSP_INVALID_PARAMETER: u8 = 0x07;
/// Failed to execute command.
pub const MRSP_EXECUTION_FAILED: u8 = 0x08;
/// Unknown device id.
pub const MRSP_UNKNOWN_DEVICE_ID: u8 = 0x09;
/// Generic RAM access needed but busy.
pub const MRSP_MEMORY_BUSY: u8 = 0x0A;
/// Supplied password incorrect.
pub const MRSP_BAD_PASSWORD: u8 = 0x0B;
/// Voltage too low for reflash operation.
pub const MRSP_POWER_NO_GOOD: u8 = 0x31;
/// Illegal page number provided.
pub const MRSP_PAGE_ILLEGAL: u8 = 0x32;
/// Page did not reprogram correctly.
pub const MRSP_FLASH_FAIL: u8 = 0x33;
/// Main application corrupt.
pub const MRSP_MAIN_APPLICATION_CORRUPT: u8 = 0x34;
/// Message timed out.
pub const MRSP_MESSAGE_TIMEOUT: u8 = 0x35;

// ============================================================================
// Async Ids (orb → host, unsolicited)
// ============================================================================

/// Power state change notification.
pub const ASYNC_POWER_NOTIFICATION: u8 = 0x01;
/// Level 1 diagnostic response.
pub const ASYNC_LEVEL1_DIAGNOSTIC: u8 = 0x02;
/// Streaming sensor data.
pub const ASYNC_SENSOR_DATA: u8 = 0x03;
/// Config block contents.
pub const ASYNC_CONFIG_BLOCK: u8 = 0x04;
/// Pre-sleep warning (10 seconds out).
pub const ASYNC_PRE_SLEEP_WARNING: u8 = 0x05;
/// Macro marker reached.
pub const ASYNC_MACRO_MARKERS: u8 = 0x06;
/// Collision detected.
pub const ASYNC_COLLISION: u8 = 0x07;
/// orbBasic PRINT statement output.
pub const ASYNC_ORB_BASIC_PRINT: u8 = 0x08;
/// orbBasic error, ASCII encoded.
pub const ASYNC_ORB_BASIC_ERROR_ASCII: u8 = 0x09;
/// orbBasic error, binary encoded.
pub const ASYNC_ORB_BASIC_ERROR_BINARY: u8 = 0x0A;
/// Self-level maneuver result.
pub const ASYNC_SELF_LEVEL_RESULT: u8 = 0x0B;
/// Gyro axis limit exceeded.
pub const ASYNC_GYRO_AXIS_LIMIT_EXCEEDED: u8 = 0x0C;
/// Soul data block.
pub const ASYNC_SOUL_DATA: u8 = 0x0D;
/// Level up notification.
pub const ASYNC_LEVEL_UP: u8 = 0x0E;
/// Shield damage notification.
pub const ASYNC_SHIELD_DAMAGE: u8 = 0x0F;
/// XP update notification.
pub const ASYNC_XP_UPDATE: u8 = 0x10;
/// Boost update notification.
pub const ASYNC_BOOST_UPDATE: u8 = 0x11;

// ============================================================================
// Sizes
// ============================================================================

/// Response frame overhead: SOP1 + SOP2 + mrsp + seq + len + chk.
pub const RESPONSE_OVERHEAD: usize = 6;
/// Async frame overhead: SOP1 + SOP2 + id + len_msb + len_lsb + chk.
pub const ASYNC_OVERHEAD: usize = 6;
/// Command frame overhead: SOP1 + SOP2 + did + cid + seq + len + chk.
pub const COMMAND_OVERHEAD: usize = 7;
/// Maximum payload length in a synchronous (command or response) frame.
pub const MAX_SYNC_PAYLOAD: usize = 255;
