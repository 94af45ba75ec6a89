//! Fixed operator-facing messages.

pub const LOGIN_ID_REQUIRED: &str = "ログインIDを入力してください";
pub const PASSWORD_TOO_SHORT: &str = "パスワードは6文字以上である必要があります";

pub const LOGIN_SUCCEEDED: &str = "ログインしました";
pub const INVALID_CREDENTIALS: &str = "ログインIDまたはパスワードが正しくありません";
pub const USER_NOT_FOUND: &str = "ユーザーが見つかりません";
pub const LOGIN_FAILED: &str = "ログインに失敗しました";

pub const LOGGED_OUT: &str = "ログアウトしました";
