pub mod weights;

pub use self::weights::create_redis_client;
pub use self::weights::RedisWeightStore;
pub use self::weights::WeightKey;
