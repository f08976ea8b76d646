use std::env;

/// Polarの接続先環境
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolarEnvironment {
    Production,
    Sandbox,
}

impl PolarEnvironment {
    /// 不明な値は本番扱い
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "sandbox" => Self::Sandbox,
            _ => Self::Production,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.polar.sh",
            Self::Sandbox => "https://sandbox-api.polar.sh",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PolarConfig {
    pub access_token: String,
    pub environment: PolarEnvironment,
    pub development_mode: bool,
}

impl PolarConfig {
    pub fn from_env() -> Self {
        let development_mode = env::var("POLAR_DEVELOPMENT_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        let environment = PolarEnvironment::parse(
            &env::var("POLAR_ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
        );

        if development_mode {
            tracing::info!("Payment development mode enabled - using mock Polar responses");
            return Self {
                access_token: String::new(),
                environment,
                development_mode: true,
            };
        }

        let access_token = env::var("POLAR_ACCESS_TOKEN").unwrap_or_else(|_| {
            tracing::warn!("POLAR_ACCESS_TOKEN not set - Polar API calls will be rejected");
            String::new()
        });

        Self {
            access_token,
            environment,
            development_mode: false,
        }
    }

    pub fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }
}
