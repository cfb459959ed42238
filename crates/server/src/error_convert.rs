use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert an AppError into a ServerFnError by serializing as JSON, so the
/// client can recover it with `AppError::from_server_error`.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_fn_error_round_trips_app_error() {
        let err = AppError::not_found("Contact relay is disabled");
        let sfe = err.clone().into_server_fn_error();
        let recovered = AppError::from_server_error(&sfe.to_string()).unwrap();
        assert_eq!(recovered, err);
    }
}
