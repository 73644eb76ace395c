use chrono::Utc;

/// RFC 3339 timestamp stamped on every report.
pub fn report_timestamp() -> String {
    Utc::now().to_rfc3339()
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse the `--seeds` list, rejecting anything that is not a `u64`.
pub fn parse_seeds(s: &str) -> anyhow::Result<Vec<u64>> {
    split_csv(s)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|err| anyhow::anyhow!("invalid seed {token:?}: {err}"))
        })
        .collect()
}
