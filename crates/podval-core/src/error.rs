use crate::notice::Notice;
use crate::room_code::RoomCode;

/// Input validation failures. None of them mutate session state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Введите ваше имя")]
    EmptyName,

    #[error("Введите код комнаты")]
    EmptyRoomCode,

    #[error("Комната {0} не найдена")]
    RoomNotFound(RoomCode),

    #[error("Комната {0} заполнена")]
    RoomFull(RoomCode),
}

impl SessionError {
    /// Warning notice shown to the user for this error.
    pub fn notice(&self) -> Notice {
        Notice::warning(self.to_string())
    }
}

impl From<SessionError> for Notice {
    fn from(err: SessionError) -> Self {
        err.notice()
    }
}
