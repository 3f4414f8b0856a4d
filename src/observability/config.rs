use std::env;

#[derive(Clone)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

impl ServiceContext {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_lookup(component, |key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(component: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let component = component.trim().to_string();

        let service_name = lookup("SERVICE_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| component.clone());

        let environment = lookup("STAGE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            service_name,
            environment,
            component,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_component_name() {
        let context = ServiceContext::from_lookup(" gallery-pricing ", |_| None);

        assert_eq!(context.service_name, "gallery-pricing");
        assert_eq!(context.environment, "unknown");
        assert_eq!(context.component, "gallery-pricing");
    }

    #[test]
    fn prefers_explicit_service_name_and_stage() {
        let context = ServiceContext::from_lookup("api", |key| match key {
            "SERVICE_NAME" => Some("pricing".to_string()),
            "STAGE" => Some("Production".to_string()),
            _ => None,
        });

        assert_eq!(context.service_name, "pricing");
        assert_eq!(context.environment, "Production");
    }
}
