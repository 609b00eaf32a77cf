/// Config sections that can be set through `ECO_<SECTION>__<FIELD>`.
const SECTIONS: [&str; 2] = ["SCHEMA", "VALIDATION"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();
    for section in SECTIONS {
        let single = format!("ECO_{section}_");
        let double = format!("ECO_{section}__");
        for key in &env_keys {
            if key.starts_with(&single) && !key.starts_with(&double) {
                warnings.push(format!(
                    "{key} is ignored. Use double underscores between section and field (example: {double}{}).",
                    &key[single.len()..]
                ));
            }
        }
    }

    warnings
}
