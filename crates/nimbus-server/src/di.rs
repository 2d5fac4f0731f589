//! Dependency injection module using Shaku.
//!
//! Wires the database pool, Redis cache, override repository, provider
//! client, and the weather lookup service into a single module, with every
//! collaborator supplied through its interface.

use nimbus_config::AppConfig;
use nimbus_core::{NimbusError, NimbusResult};
use nimbus_provider::{WeatherbitClient, WeatherbitClientParameters};
use nimbus_repository::{DatabasePool, DatabasePoolParameters, MySqlForecastOverrideRepository};
use nimbus_service::{
    RedisCacheService, RedisCacheServiceParameters, WeatherService, WeatherServiceComponent,
    WeatherServiceComponentParameters,
};
use shaku::{module, HasComponent};
use sqlx::mysql::MySqlPool;
use std::sync::Arc;

module! {
    pub AppModule {
        components = [
            DatabasePool,
            RedisCacheService,
            MySqlForecastOverrideRepository,
            WeatherbitClient,
            WeatherServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the application module from configuration and a connected pool.
pub fn build_app_module(config: &AppConfig, db_pool: MySqlPool) -> NimbusResult<Arc<AppModule>> {
    // Redis cache pool (if enabled)
    let cache_pool = if config.redis.enabled {
        let redis_cfg = deadpool_redis::Config::from_url(&config.redis.url);
        let pool = redis_cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| NimbusError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        Some(Arc::new(pool))
    } else {
        None
    };

    // Provider client with its bounded-timeout HTTP client
    let provider_client = WeatherbitClient::new(&config.provider)?;

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: Some(db_pool),
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache_pool,
        })
        .with_component_parameters::<WeatherbitClient>(WeatherbitClientParameters {
            client: provider_client.http_client(),
            base_url: provider_client.base_url().to_string(),
            api_key: config.provider.api_key.clone(),
        })
        .with_component_parameters::<WeatherServiceComponent>(WeatherServiceComponentParameters {
            current_weather_ttl: config.cache_ttl.current_weather(),
            forecast_ttl: config.cache_ttl.forecast(),
        })
        .build();

    Ok(Arc::new(module))
}

/// Resolves common services from the module.
pub trait ServiceResolver {
    /// Resolves the weather service from the module.
    fn weather_service(&self) -> Arc<dyn WeatherService>;
}

impl ServiceResolver for AppModule {
    fn weather_service(&self) -> Arc<dyn WeatherService> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_provider::WeatherProvider;
    use nimbus_repository::{DatabasePoolInterface, ForecastOverrideRepository};
    use nimbus_service::CacheInterface;

    #[test]
    fn test_module_provides_all_components() {
        // Compile-time verification that the module wires every interface.
        fn _assert_has_weather_service<T: HasComponent<dyn WeatherService>>() {}
        fn _assert_has_repository<T: HasComponent<dyn ForecastOverrideRepository>>() {}
        fn _assert_has_cache<T: HasComponent<dyn CacheInterface>>() {}
        fn _assert_has_provider<T: HasComponent<dyn WeatherProvider>>() {}
        fn _assert_has_pool<T: HasComponent<dyn DatabasePoolInterface>>() {}

        _assert_has_weather_service::<AppModule>();
        _assert_has_repository::<AppModule>();
        _assert_has_cache::<AppModule>();
        _assert_has_provider::<AppModule>();
        _assert_has_pool::<AppModule>();
    }

    #[test]
    fn test_resolver_trait_is_object_safe() {
        fn _use_service_resolver(_r: &dyn ServiceResolver) {}
    }
}
