//! Typed packets received from the orb.

use crate::constants::*;
use crate::error::ProtocolError;

/// Result code carried in a synchronous response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    /// Command succeeded.
    Ok,
    /// Non-specific error.
    GeneralError,
    /// Received checksum failure.
    ChecksumFailure,
    /// Received command fragment.
    FragmentError,
    /// Unknown command id.
    BadCommand,
    /// Command currently unsupported.
    Unsupported,
    /// Bad message format.
    BadMessageFormat,
    /// Parameter value invalid.
    InvalidParameter,
    /// Failed to execute command.
    ExecutionFailed,
    /// Unknown device id.
    UnknownDeviceId,
    /// Generic RAM access needed but busy.
    MemoryBusy,
    /// Supplied password incorrect.
    BadPassword,
    /// Voltage too low for reflash operation.
    PowerNoGood,
    /// Illegal page number provided.
    PageIllegal,
    /// Page did not reprogram correctly.
    FlashFail,
    /// Main application corrupt.
    MainApplicationCorrupt,
    /// Message timed out.
    MessageTimeout,
}

impl ResponseCode {
    /// Every response code the orb can return.
    pub const ALL: [ResponseCode; 17] = [
        ResponseCode::Ok,
        ResponseCode::GeneralError,
        ResponseCode::ChecksumFailure,
        ResponseCode::FragmentError,
        ResponseCode::BadCommand,
        ResponseCode::Unsupported,
        ResponseCode::BadMessageFormat,
        ResponseCode::InvalidParameter,
        ResponseCode::ExecutionFailed,
        ResponseCode::UnknownDeviceId,
        ResponseCode::MemoryBusy,
        ResponseCode::BadPassword,
        ResponseCode::PowerNoGood,
        ResponseCode::PageIllegal,
        ResponseCode::FlashFail,
        ResponseCode::MainApplicationCorrupt,
        ResponseCode::MessageTimeout,
    ];

    /// Whether this code reports success.
    pub fn is_ok(&self) -> bool {
        matches!(self, ResponseCode::Ok)
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> Self {
        match code {
            ResponseCode::Ok => MRSP_OK,
            ResponseCode::GeneralError => MRSP_GENERAL_ERROR,
            ResponseCode::ChecksumFailure => MRSP_CHECKSUM_FAILURE,
            ResponseCode::FragmentError => MRSP_FRAGMENT_ERROR,
            ResponseCode::BadCommand => MRSP_BAD_COMMAND,
            ResponseCode::Unsupported => MRSP_UNSUPPORTED,
            ResponseCode::BadMessageFormat => MRSP_BAD_MESSAGE_FORMAT,
            ResponseCode::InvalidParameter => MRSP_INVALID_PARAMETER,
            ResponseCode::ExecutionFailed => MRSP_EXECUTION_FAILED,
            ResponseCode::UnknownDeviceId => MRSP_UNKNOWN_DEVICE_ID,
            ResponseCode::MemoryBusy => MRSP_MEMORY_BUSY,
            ResponseCode::BadPassword => MRSP_BAD_PASSWORD,
            ResponseCode::PowerNoGood => MRSP_POWER_NO_GOOD,
            ResponseCode::PageIllegal => MRSP_PAGE_ILLEGAL,
            ResponseCode::FlashFail => MRSP_FLASH_FAIL,
            ResponseCode::MainApplicationCorrupt => MRSP_MAIN_APPLICATION_CORRUPT,
            ResponseCode::MessageTimeout => MRSP_MESSAGE_TIMEOUT,
        }
    }
}

impl TryFrom<u8> for ResponseCode {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            MRSP_OK => Ok(ResponseCode::Ok),
            MRSP_GENERAL_ERROR => Ok(ResponseCode::GeneralError),
            MRSP_CHECKSUM_FAILURE => Ok(ResponseCode::ChecksumFailure),
            MRSP_FRAGMENT_ERROR => Ok(ResponseCode::FragmentError),
            MRSP_BAD_COMMAND => Ok(ResponseCode::BadCommand),
            MRSP_UNSUPPORTED => Ok(ResponseCode::Unsupported),
            MRSP_BAD_MESSAGE_FORMAT => Ok(ResponseCode::BadMessageFormat),
            MRSP_INVALID_PARAMETER => Ok(ResponseCode::InvalidParameter),
            MRSP_EXECUTION_FAILED => Ok(ResponseCode::ExecutionFailed),
            MRSP_UNKNOWN_DEVICE_ID => Ok(ResponseCode::UnknownDeviceId),
            MRSP_MEMORY_BUSY => Ok(ResponseCode::MemoryBusy),
            MRSP_BAD_PASSWORD => Ok(ResponseCode::BadPassword),
            MRSP_POWER_NO_GOOD => Ok(ResponseCode::PowerNoGood),
            MRSP_PAGE_ILLEGAL => Ok(ResponseCode::PageIllegal),
            MRSP_FLASH_FAIL => Ok(ResponseCode::FlashFail),
            MRSP_MAIN_APPLICATION_CORRUPT => Ok(ResponseCode::MainApplicationCorrupt),
            MRSP_MESSAGE_TIMEOUT => Ok(ResponseCode::MessageTimeout),
            other => Err(ProtocolError::UnknownResponseCode(other)),
        }
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseCode::Ok => write!(f, "ok"),
            ResponseCode::GeneralError => write!(f, "general error"),
            ResponseCode::ChecksumFailure => write!(f, "checksum failure"),
            ResponseCode::FragmentError => write!(f, "command fragment"),
            ResponseCode::BadCommand => write!(f, "unknown command id"),
            ResponseCode::Unsupported => write!(f, "command unsupported"),
            ResponseCode::BadMessageFormat => write!(f, "bad message format"),
            ResponseCode::InvalidParameter => write!(f, "invalid parameter"),
            ResponseCode::ExecutionFailed => write!(f, "execution failed"),
            ResponseCode::UnknownDeviceId => write!(f, "unknown device id"),
            ResponseCode::MemoryBusy => write!(f, "memory busy"),
            ResponseCode::BadPassword => write!(f, "bad password"),
            ResponseCode::PowerNoGood => write!(f, "voltage too low"),
            ResponseCode::PageIllegal => write!(f, "illegal page"),
            ResponseCode::FlashFail => write!(f, "flash failure"),
            ResponseCode::MainApplicationCorrupt => write!(f, "main application corrupt"),
            ResponseCode::MessageTimeout => write!(f, "message timeout"),
        }
    }
}

/// Identifier carried in an asynchronous notification frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsyncKind {
    /// Power state change notification.
    PowerNotification,
    /// Level 1 diagnostic response.
    Level1Diagnostic,
    /// Streaming sensor data.
    SensorData,
    /// Config block contents.
    ConfigBlock,
    /// Pre-sleep warning.
    PreSleepWarning,
    /// Macro marker reached.
    MacroMarkers,
    /// Collision detected.
    Collision,
    /// orbBasic PRINT statement output.
    OrbBasicPrint,
    /// orbBasic error, ASCII encoded.
    OrbBasicErrorAscii,
    /// orbBasic error, binary encoded.
    OrbBasicErrorBinary,
    /// Self-level maneuver result.
    SelfLevelResult,
    /// Gyro axis limit exceeded.
    GyroAxisLimitExceeded,
    /// Soul data block.
    SoulData,
    /// Level up notification.
    LevelUp,
    /// Shield damage notification.
    ShieldDamage,
    /// XP update notification.
    XpUpdate,
    /// Boost update notification.
    BoostUpdate,
}

impl AsyncKind {
    /// Every async id the orb can emit.
    pub const ALL: [AsyncKind; 17] = [
        AsyncKind::PowerNotification,
        AsyncKind::Level1Diagnostic,
        AsyncKind::SensorData,
        AsyncKind::ConfigBlock,
        AsyncKind::PreSleepWarning,
        AsyncKind::MacroMarkers,
        AsyncKind::Collision,
        AsyncKind::OrbBasicPrint,
        AsyncKind::OrbBasicErrorAscii,
        AsyncKind::OrbBasicErrorBinary,
        AsyncKind::SelfLevelResult,
        AsyncKind::GyroAxisLimitExceeded,
        AsyncKind::SoulData,
        AsyncKind::LevelUp,
        AsyncKind::ShieldDamage,
        AsyncKind::XpUpdate,
        AsyncKind::BoostUpdate,
    ];
}

impl From<AsyncKind> for u8 {
    fn from(kind: AsyncKind) -> Self {
        match kind {
            AsyncKind::PowerNotification => ASYNC_POWER_NOTIFICATION,
            AsyncKind::Level1Diagnostic => ASYNC_LEVEL1_DIAGNOSTIC,
            AsyncKind::SensorData => ASYNC_SENSOR_DATA,
            AsyncKind::ConfigBlock => ASYNC_CONFIG_BLOCK,
            AsyncKind::PreSleepWarning => ASYNC_PRE_SLEEP_WARNING,
            AsyncKind::MacroMarkers => ASYNC_MACRO_MARKERS,
            AsyncKind::Collision => ASYNC_COLLISION,
            AsyncKind::OrbBasicPrint => ASYNC_ORB_BASIC_PRINT,
            AsyncKind::OrbBasicErrorAscii => ASYNC_ORB_BASIC_ERROR_ASCII,
            AsyncKind::OrbBasicErrorBinary => ASYNC_ORB_BASIC_ERROR_BINARY,
            AsyncKind::SelfLevelResult => ASYNC_SELF_LEVEL_RESULT,
            AsyncKind::GyroAxisLimitExceeded => ASYNC_GYRO_AXIS_LIMIT_EXCEEDED,
            AsyncKind::SoulData => ASYNC_SOUL_DATA,
            AsyncKind::LevelUp => ASYNC_LEVEL_UP,
            AsyncKind::ShieldDamage => ASYNC_SHIELD_DAMAGE,
            AsyncKind::XpUpdate => ASYNC_XP_UPDATE,
            AsyncKind::BoostUpdate => ASYNC_BOOST_UPDATE,
        }
    }
}

impl TryFrom<u8> for AsyncKind {
    type Error = ProtocolError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            ASYNC_POWER_NOTIFICATION => Ok(AsyncKind::PowerNotification),
            ASYNC_LEVEL1_DIAGNOSTIC => Ok(AsyncKind::Level1Diagnostic),
            ASYNC_SENSOR_DATA => Ok(AsyncKind::SensorData),
            ASYNC_CONFIG_BLOCK => Ok(AsyncKind::ConfigBlock),
            ASYNC_PRE_SLEEP_WARNING => Ok(AsyncKind::PreSleepWarning),
            ASYNC_MACRO_MARKERS => Ok(AsyncKind::MacroMarkers),
            ASYNC_COLLISION => Ok(AsyncKind::Collision),
            ASYNC_ORB_BASIC_PRINT => Ok(AsyncKind::OrbBasicPrint),
            ASYNC_ORB_BASIC_ERROR_ASCII => Ok(AsyncKind::OrbBasicErrorAscii),
            ASYNC_ORB_BASIC_ERROR_BINARY => Ok(AsyncKind::OrbBasicErrorBinary),
            ASYNC_SELF_LEVEL_RESULT => Ok(AsyncKind::SelfLevelResult),
            ASYNC_GYRO_AXIS_LIMIT_EXCEEDED => Ok(AsyncKind::GyroAxisLimitExceeded),
            ASYNC_SOUL_DATA => Ok(AsyncKind::SoulData),
            ASYNC_LEVEL_UP => Ok(AsyncKind::LevelUp),
            ASYNC_SHIELD_DAMAGE => Ok(AsyncKind::ShieldDamage),
            ASYNC_XP_UPDATE => Ok(AsyncKind::XpUpdate),
            ASYNC_BOOST_UPDATE => Ok(AsyncKind::BoostUpdate),
            other => Err(ProtocolError::UnknownAsyncId(other)),
        }
    }
}

/// Decoded synchronous acknowledgement frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePacket {
    /// Result code.
    pub code: ResponseCode,
    /// Sequence number echoing the originating command.
    pub sequence: u8,
    /// Payload bytes.
    pub payload: Vec<u8>,
}

/// Decoded asynchronous notification frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncPacket {
    /// Notification kind.
    pub kind: AsyncKind,
    /// Payload bytes.
    pub payload: Vec<u8>,
}

/// Either a synchronous response or an asynchronous notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    /// A response to a command.
    Response(ResponsePacket),
    /// An unsolicited notification.
    Async(AsyncPacket),
}
