use crate::wire::HealthRes;

/// Health service for the REST API.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Report that the service is up.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "MedGuard is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_ok() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert!(res.message.contains("MedGuard"));
    }
}
