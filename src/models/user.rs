use serde::{Deserialize, Serialize};

/// Perfil del usuario autenticado, tal como lo entrega `/api/user/my`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    pub email: String,
    #[serde(rename = "nickName", default)]
    pub nick_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "noticeSet", default)]
    pub notice_set: bool,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("ADMIN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_admin_ignora_mayusculas() {
        let user: UserProfile = serde_json::from_value(serde_json::json!({
            "email": "a@b.com",
            "nickName": "Ana",
            "role": "admin",
            "noticeSet": true
        }))
        .unwrap();

        assert!(user.is_admin());
        assert!(user.notice_set);
    }

    #[test]
    fn campos_opcionales_tienen_default() {
        let user: UserProfile =
            serde_json::from_value(serde_json::json!({ "email": "a@b.com" })).unwrap();

        assert_eq!(user.role, "");
        assert!(!user.is_admin());
        assert!(!user.notice_set);
    }
}
