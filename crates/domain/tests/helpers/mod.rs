#![allow(dead_code)]

use std::collections::HashMap;

pub fn full_env() -> HashMap<&'static str, String> {
    [
        ("POSTGRES_HOST", "pg.internal"),
        ("POSTGRES_PORT", "5432"),
        ("POSTGRES_DB", "app"),
        ("POSTGRES_USER", "sweeper"),
        ("POSTGRES_PASSWORD", "pg-secret"),
        ("CLICKHOUSE_HOST", "ch.internal"),
        ("CLICKHOUSE_PORT", "8123"),
        ("CLICKHOUSE_DB", "analytics"),
        ("CLICKHOUSE_USER", "default"),
        ("CLICKHOUSE_PASSWORD", ""),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect()
}

pub fn lookup(env: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
    move |key| env.get(key).cloned()
}
