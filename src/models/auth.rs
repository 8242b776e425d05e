use serde::{Deserialize, Serialize};

/// Par de tokens + apodo que persiste el cliente tras autenticarse.
/// Las tres claves se guardan y se limpian como unidad.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenPair {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    #[serde(default)]
    pub nickname: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "nickName")]
    pub nick_name: String,
    #[serde(rename = "serialNum")]
    pub serial_num: String,
}

/// Bloque `data` del registro: el apodo llega anidado en `user`
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct SignupData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    pub user: SignupUser,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct SignupUser {
    #[serde(rename = "nickName", default)]
    pub nick_name: String,
}

impl From<SignupData> for TokenPair {
    fn from(data: SignupData) -> Self {
        Self {
            access_token: data.access_token,
            refresh_token: data.refresh_token,
            nickname: data.user.nick_name,
        }
    }
}
