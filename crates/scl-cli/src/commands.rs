use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use colored::Colorize;
use scl_crypto::{
    canonical_hash, generate_ed25519_key_pair, generate_key_pair, generate_secure_id,
    validate_record, ChainVerifier, SignatureScheme,
};
use scl_ledger::{Admission, Ledger, LedgerConfig, SearchCriteria, TraceReader, TraceWriter};
use scl_store::{InMemoryRecordStore, InboundRecord};
use scl_types::{Actor, Location, Product, TraceEvent, TraceRecord};
use serde_json::{json, Value};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let format = cli.format;
    match cli.command {
        Command::Keygen(args) => cmd_keygen(args, &config, format),
        Command::SecureId => cmd_secure_id(format),
        Command::Hash(args) => cmd_hash(args, format),
        Command::Verify(args) => cmd_verify(args, &config, format),
        Command::Chain(args) => cmd_chain(args, &config, format),
        Command::Search(args) => cmd_search(args, &config, format),
        Command::Stats(args) => cmd_stats(args, &config, format),
        Command::Append(args) => cmd_append(args, &config, format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<LedgerConfig> {
    match path {
        Some(path) => LedgerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(LedgerConfig::default()),
    }
}

// ---------------------------------------------------------------------------
// Record files
// ---------------------------------------------------------------------------

/// Raw entries of a record file. Entries are not checked here.
fn read_entries(path: &Path) -> anyhow::Result<Vec<Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    match serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))? {
        Value::Array(entries) => Ok(entries),
        _ => bail!("{} is not a JSON array of records", path.display()),
    }
}

fn write_records(path: &Path, records: &[TraceRecord]) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

struct Skipped {
    key: String,
    reason: String,
}

struct LoadedLedger {
    ledger: Ledger,
    skipped: Vec<Skipped>,
}

/// Admit every entry through the ledger's ingestion path.
fn ledger_from_entries(entries: Vec<Value>, config: &LedgerConfig) -> LoadedLedger {
    let ledger = Ledger::new(Arc::new(InMemoryRecordStore::new()), config.clone());
    let mut skipped = Vec::new();
    for (position, payload) in entries.into_iter().enumerate() {
        let key = entry_key(&payload, position);
        if let Admission::Rejected(err) = ledger.ingest_inbound(&InboundRecord::new(key.clone(), payload)) {
            skipped.push(Skipped {
                key,
                reason: err.to_string(),
            });
        }
    }
    LoadedLedger { ledger, skipped }
}

fn load_ledger(path: &Path, config: &LedgerConfig) -> anyhow::Result<LoadedLedger> {
    let loaded = ledger_from_entries(read_entries(path)?, config);
    for skipped in &loaded.skipped {
        eprintln!(
            "{} skipped {}: {}",
            "!".yellow().bold(),
            skipped.key.yellow(),
            skipped.reason
        );
    }
    Ok(loaded)
}

fn entry_key(payload: &Value, position: usize) -> String {
    payload
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{position}"))
}

fn format_timestamp(ms: u64) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn short_hash(hash: &str) -> String {
    hash.chars().take(12).collect()
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_record_line(record: &TraceRecord) {
    println!(
        "  {}  {:<14} {} @ {}  {}",
        format_timestamp(record.timestamp).dimmed(),
        record.event.kind.as_str().cyan(),
        record.event.actor.name,
        record.event.location.name,
        short_hash(&record.hash).yellow()
    );
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

fn cmd_keygen(args: KeygenArgs, config: &LedgerConfig, format: OutputFormat) -> anyhow::Result<()> {
    let scheme = args.scheme.unwrap_or(config.signature_scheme);
    let pair = match scheme {
        SignatureScheme::HmacSha256 => generate_key_pair(),
        SignatureScheme::Ed25519 => generate_ed25519_key_pair(),
    };
    match format {
        OutputFormat::Json => print_json(&json!({
            "scheme": scheme.as_str(),
            "publicKey": pair.public_key,
            "privateKey": pair.private_key,
        })),
        OutputFormat::Text => {
            println!("{} Generated {} key pair", "✓".green().bold(), scheme.as_str().cyan());
            println!("  Public key:  {}", pair.public_key);
            println!("  Private key: {}", pair.private_key.yellow());
            Ok(())
        }
    }
}

fn cmd_secure_id(format: OutputFormat) -> anyhow::Result<()> {
    let id = generate_secure_id();
    match format {
        OutputFormat::Json => print_json(&json!({ "id": id })),
        OutputFormat::Text => {
            println!("{id}");
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Hashing and verification
// ---------------------------------------------------------------------------

struct HashCheck {
    id: String,
    stored: String,
    computed: Result<String, String>,
}

impl HashCheck {
    fn matches(&self) -> bool {
        matches!(&self.computed, Ok(computed) if *computed == self.stored)
    }
}

fn hash_entries(entries: &[Value]) -> Vec<HashCheck> {
    entries
        .iter()
        .enumerate()
        .map(|(position, payload)| {
            let id = entry_key(payload, position);
            let stored = payload
                .get("hash")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let computed = serde_json::from_value::<TraceRecord>(payload.clone())
                .map_err(|e| e.to_string())
                .and_then(|record| {
                    canonical_hash(&record.hash_input()).map_err(|e| e.to_string())
                });
            HashCheck {
                id,
                stored,
                computed,
            }
        })
        .collect()
}

fn cmd_hash(args: FileArgs, format: OutputFormat) -> anyhow::Result<()> {
    let checks = hash_entries(&read_entries(&args.file)?);
    match format {
        OutputFormat::Json => {
            let rows: Vec<Value> = checks
                .iter()
                .map(|check| match &check.computed {
                    Ok(computed) => json!({
                        "id": check.id,
                        "stored": check.stored,
                        "computed": computed,
                        "matches": check.matches(),
                    }),
                    Err(reason) => json!({ "id": check.id, "error": reason }),
                })
                .collect();
            print_json(&rows)
        }
        OutputFormat::Text => {
            for check in &checks {
                match &check.computed {
                    Ok(computed) if check.matches() => {
                        println!("{} {}  {}", "✓".green(), check.id, computed)
                    }
                    Ok(computed) => println!(
                        "{} {}  stored {} computed {}",
                        "✗".red().bold(),
                        check.id,
                        short_hash(&check.stored).red(),
                        short_hash(computed).green()
                    ),
                    Err(reason) => {
                        println!("{} {}  malformed: {}", "✗".red().bold(), check.id, reason)
                    }
                }
            }
            Ok(())
        }
    }
}

struct RecordCheck {
    id: String,
    hash_ok: bool,
    signature_ok: Option<bool>,
    error: Option<String>,
}

struct ChainCheck {
    product_id: String,
    length: usize,
    error: Option<String>,
}

struct VerifyReport {
    records: Vec<RecordCheck>,
    chains: Vec<ChainCheck>,
}

impl VerifyReport {
    fn problems(&self) -> usize {
        let records = self
            .records
            .iter()
            .filter(|r| r.error.is_some() || !r.hash_ok || r.signature_ok == Some(false))
            .count();
        let chains = self.chains.iter().filter(|c| c.error.is_some()).count();
        records + chains
    }
}

/// Check each entry on its own, then each product's records as a chain.
fn verify_entries(entries: &[Value], scheme: SignatureScheme, key: Option<&str>) -> VerifyReport {
    let mut records = Vec::with_capacity(entries.len());
    let mut by_product: BTreeMap<String, Vec<TraceRecord>> = BTreeMap::new();

    for (position, payload) in entries.iter().enumerate() {
        let id = entry_key(payload, position);
        match serde_json::from_value::<TraceRecord>(payload.clone()) {
            Ok(record) => {
                records.push(RecordCheck {
                    id,
                    hash_ok: validate_record(&record),
                    signature_ok: key.map(|key| scheme.verify(&record, key)),
                    error: None,
                });
                by_product
                    .entry(record.product_id().to_string())
                    .or_default()
                    .push(record);
            }
            Err(e) => records.push(RecordCheck {
                id,
                hash_ok: false,
                signature_ok: None,
                error: Some(e.to_string()),
            }),
        }
    }

    let chains = by_product
        .into_iter()
        .map(|(product_id, chain)| ChainCheck {
            length: chain.len(),
            error: ChainVerifier::verify(&chain).err().map(|e| e.to_string()),
            product_id,
        })
        .collect();

    VerifyReport { records, chains }
}

fn cmd_verify(args: VerifyArgs, config: &LedgerConfig, format: OutputFormat) -> anyhow::Result<()> {
    let entries = read_entries(&args.file)?;
    let report = verify_entries(&entries, config.signature_scheme, args.key.as_deref());

    match format {
        OutputFormat::Json => {
            let records: Vec<Value> = report
                .records
                .iter()
                .map(|r| {
                    json!({
                        "id": r.id,
                        "hashValid": r.hash_ok,
                        "signatureValid": r.signature_ok,
                        "error": r.error,
                    })
                })
                .collect();
            let chains: Vec<Value> = report
                .chains
                .iter()
                .map(|c| {
                    json!({
                        "productId": c.product_id,
                        "length": c.length,
                        "isValid": c.error.is_none(),
                        "error": c.error,
                    })
                })
                .collect();
            print_json(&json!({ "records": records, "chains": chains }))?;
        }
        OutputFormat::Text => {
            for r in &report.records {
                let mark = if r.error.is_none() && r.hash_ok && r.signature_ok != Some(false) {
                    "✓".green()
                } else {
                    "✗".red().bold()
                };
                let mut line = format!("{mark} {}", r.id);
                if let Some(error) = &r.error {
                    line.push_str(&format!("  malformed: {error}"));
                } else if !r.hash_ok {
                    line.push_str(&format!("  {}", "hash mismatch".red()));
                }
                match r.signature_ok {
                    Some(true) => line.push_str(&format!("  signature {}", "ok".green())),
                    Some(false) => line.push_str(&format!("  signature {}", "invalid".red())),
                    None => {}
                }
                println!("{line}");
            }
            for c in &report.chains {
                match &c.error {
                    None => println!(
                        "Chain {} ({} records): {}",
                        c.product_id.bold(),
                        c.length,
                        "valid".green()
                    ),
                    Some(error) => println!(
                        "Chain {} ({} records): {} ({error})",
                        c.product_id.bold(),
                        c.length,
                        "broken".red().bold()
                    ),
                }
            }
        }
    }

    let problems = report.problems();
    if problems > 0 {
        bail!("{problems} problem(s) found in {}", args.file.display());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

fn cmd_chain(args: ChainArgs, config: &LedgerConfig, format: OutputFormat) -> anyhow::Result<()> {
    let loaded = load_ledger(&args.file, config)?;
    let Some(chain) = loaded.ledger.get_trace_chain(&args.product) else {
        bail!("no records for product {}", args.product);
    };
    match format {
        OutputFormat::Json => print_json(&chain),
        OutputFormat::Text => {
            let validity = if chain.is_valid {
                "valid".green()
            } else {
                "broken".red().bold()
            };
            println!("{} ({}): {}", chain.name.bold(), chain.id, validity);
            println!("  Last updated: {}", format_timestamp(chain.last_updated));
            for record in &chain.records {
                print_record_line(record);
            }
            Ok(())
        }
    }
}

fn criteria_from(args: &SearchArgs) -> SearchCriteria {
    let mut criteria = SearchCriteria::new();
    if let Some(product) = &args.product {
        criteria = criteria.product(product.clone());
    }
    if let Some(actor) = &args.actor {
        criteria = criteria.actor(actor.clone());
    }
    if let Some(kind) = args.event {
        criteria = criteria.event_type(kind);
    }
    if args.from.is_some() || args.to.is_some() {
        criteria = criteria.between(args.from.unwrap_or(0), args.to.unwrap_or(u64::MAX));
    }
    if let Some(location) = &args.location {
        criteria = criteria.location(location.clone());
    }
    criteria
}

fn cmd_search(args: SearchArgs, config: &LedgerConfig, format: OutputFormat) -> anyhow::Result<()> {
    let loaded = load_ledger(&args.file, config)?;
    let found = loaded.ledger.search_records(&criteria_from(&args));
    match format {
        OutputFormat::Json => print_json(&found),
        OutputFormat::Text => {
            println!("{} matching record(s)", found.len().to_string().bold());
            for record in &found {
                print_record_line(record);
            }
            Ok(())
        }
    }
}

fn cmd_stats(args: FileArgs, config: &LedgerConfig, format: OutputFormat) -> anyhow::Result<()> {
    let loaded = load_ledger(&args.file, config)?;
    let stats = loaded.ledger.network_stats();
    match format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Text => {
            println!("Records:              {}", stats.total_records.to_string().bold());
            println!("Products:             {}", stats.unique_products);
            println!("Actors:               {}", stats.unique_actors);
            println!("Average chain length: {:.2}", stats.average_chain_length);
            if !loaded.skipped.is_empty() {
                println!("Skipped entries:      {}", loaded.skipped.len().to_string().yellow());
            }
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

fn parse_detail(detail: &str) -> anyhow::Result<(String, Value)> {
    let Some((key, raw)) = detail.split_once('=') else {
        bail!("detail must be key=value, got {detail:?}");
    };
    if key.is_empty() {
        bail!("detail key is empty in {detail:?}");
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn location_id(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn append_record(args: AppendArgs, config: &LedgerConfig) -> anyhow::Result<TraceRecord> {
    let entries = if args.file.exists() {
        read_entries(&args.file)?
    } else {
        Vec::new()
    };
    let loaded = ledger_from_entries(entries, config);
    if !loaded.skipped.is_empty() {
        bail!(
            "refusing to rewrite {}: {} invalid entr{} (first: {})",
            args.file.display(),
            loaded.skipped.len(),
            if loaded.skipped.len() == 1 { "y" } else { "ies" },
            loaded.skipped[0].key
        );
    }

    let actor = Actor::new(args.actor_id, args.actor_name, args.actor_type, args.public_key);
    loaded.ledger.initialize(actor.clone(), &args.key)?;

    let mut event = TraceEvent::new(
        args.event,
        actor,
        Location::new(location_id(&args.location), args.location),
        Product::new(
            args.product_id,
            args.product_name,
            args.category,
            args.quantity,
            args.unit,
        ),
    );
    for detail in &args.details {
        let (key, value) = parse_detail(detail)?;
        event = event.with_detail(key, value);
    }

    let record = loaded
        .ledger
        .create_record(event, args.previous.as_deref())?;
    write_records(&args.file, &loaded.ledger.records())?;
    Ok(record)
}

fn cmd_append(args: AppendArgs, config: &LedgerConfig, format: OutputFormat) -> anyhow::Result<()> {
    let file = args.file.clone();
    let record = append_record(args, config)?;
    match format {
        OutputFormat::Json => print_json(&record),
        OutputFormat::Text => {
            println!(
                "{} Appended {} record to {}",
                "✓".green().bold(),
                record.event.kind.as_str().cyan(),
                file.display()
            );
            println!("  Id:       {}", record.id.yellow());
            println!("  Hash:     {}", record.hash);
            if !record.is_genesis() {
                println!("  Previous: {}", record.previous_hash);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use scl_types::{ActorType, EventType, GENESIS_HASH};

    const KEY: &str = "cli-test-key";

    fn append_args(file: &Path, event: EventType, product: &str, previous: Option<&str>) -> AppendArgs {
        AppendArgs {
            file: file.to_path_buf(),
            key: KEY.into(),
            actor_id: "farm-1".into(),
            actor_name: "Hill Farm".into(),
            actor_type: ActorType::Producer,
            public_key: String::new(),
            event,
            product_id: product.into(),
            product_name: "Honey".into(),
            category: "food".into(),
            quantity: 12.0,
            unit: "jar".into(),
            location: "Hill Farm Barn".into(),
            previous: previous.map(str::to_string),
            details: vec!["organic=true".into(), "grade=A".into()],
        }
    }

    fn two_record_file() -> (tempfile::TempDir, PathBuf, TraceRecord, TraceRecord) {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("records.json");
        let config = LedgerConfig::default();
        let a = append_record(append_args(&file, EventType::Production, "P1", None), &config).unwrap();
        let b = append_record(
            append_args(&file, EventType::Shipping, "P1", Some(&a.id)),
            &config,
        )
        .unwrap();
        (dir, file, a, b)
    }

    #[test]
    fn append_builds_linked_chain_on_disk() {
        let (_dir, file, a, b) = two_record_file();
        assert_eq!(a.previous_hash, GENESIS_HASH);
        assert_eq!(b.previous_hash, a.hash);
        assert_eq!(a.event.details["organic"], Value::Bool(true));
        assert_eq!(a.event.details["grade"], Value::from("A"));
        assert_eq!(a.event.location.id, "hill-farm-barn");

        let loaded = load_ledger(&file, &LedgerConfig::default()).unwrap();
        assert!(loaded.skipped.is_empty());
        let chain = loaded.ledger.get_trace_chain("P1").unwrap();
        assert!(chain.is_valid);
        assert_eq!(chain.records.len(), 2);
        assert_eq!(chain.name, "Honey");
    }

    #[test]
    fn verify_passes_clean_file() {
        let (_dir, file, _, _) = two_record_file();
        let entries = read_entries(&file).unwrap();
        let report = verify_entries(&entries, SignatureScheme::HmacSha256, Some(KEY));
        assert_eq!(report.problems(), 0);
        assert!(report.records.iter().all(|r| r.signature_ok == Some(true)));
        assert_eq!(report.chains.len(), 1);
        assert_eq!(report.chains[0].length, 2);
    }

    #[test]
    fn verify_flags_wrong_key() {
        let (_dir, file, _, _) = two_record_file();
        let entries = read_entries(&file).unwrap();
        let report = verify_entries(&entries, SignatureScheme::HmacSha256, Some("wrong"));
        assert_eq!(report.problems(), 2);
        assert!(report.chains.iter().all(|c| c.error.is_none()));
    }

    #[test]
    fn verify_flags_tampering() {
        let (_dir, file, a, _) = two_record_file();
        let mut entries = read_entries(&file).unwrap();
        entries[0]["event"]["product"]["quantity"] = json!(999);
        let report = verify_entries(&entries, SignatureScheme::HmacSha256, None);

        let first = &report.records[0];
        assert_eq!(first.id, a.id);
        assert!(!first.hash_ok);
        assert!(first.signature_ok.is_none());
        assert!(report.chains[0].error.is_some());
        assert_eq!(report.problems(), 2);
    }

    #[test]
    fn verify_reports_malformed_entries() {
        let entries = vec![json!({"id": "x"}), json!(7)];
        let report = verify_entries(&entries, SignatureScheme::HmacSha256, None);
        assert_eq!(report.records[0].id, "x");
        assert!(report.records[0].error.is_some());
        assert_eq!(report.records[1].id, "#1");
        assert!(report.chains.is_empty());
        assert_eq!(report.problems(), 2);
    }

    #[test]
    fn hash_entries_recompute_and_compare() {
        let (_dir, file, a, _) = two_record_file();
        let mut entries = read_entries(&file).unwrap();
        let checks = hash_entries(&entries);
        assert!(checks.iter().all(HashCheck::matches));
        assert_eq!(checks[0].stored, a.hash);

        entries[1]["timestamp"] = json!(1);
        let checks = hash_entries(&entries);
        assert!(checks[0].matches());
        assert!(!checks[1].matches());
    }

    #[test]
    fn loading_skips_tampered_entries() {
        let (_dir, file, a, b) = two_record_file();
        let mut entries = read_entries(&file).unwrap();
        entries[1]["signature"] = json!("forged");
        entries[1]["event"]["location"]["name"] = json!("Elsewhere");
        entries.push(json!({"no": "id"}));

        let loaded = ledger_from_entries(entries, &LedgerConfig::default());
        assert_eq!(loaded.ledger.len(), 1);
        assert!(loaded.ledger.get_record(&a.id).is_some());
        let keys: Vec<&str> = loaded.skipped.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec![b.id.as_str(), "#2"]);
    }

    #[test]
    fn append_refuses_to_drop_invalid_entries() {
        let (_dir, file, _, _) = two_record_file();
        let mut entries = read_entries(&file).unwrap();
        entries[0]["hash"] = json!("0");
        std::fs::write(&file, serde_json::to_string(&entries).unwrap()).unwrap();

        let err = append_record(
            append_args(&file, EventType::Receiving, "P1", None),
            &LedgerConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("refusing to rewrite"));
        assert_eq!(read_entries(&file).unwrap().len(), 2);
    }

    #[test]
    fn strict_config_rejects_unknown_previous() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("records.json");
        let config = LedgerConfig {
            strict_predecessor: true,
            ..LedgerConfig::default()
        };
        let result = append_record(
            append_args(&file, EventType::Shipping, "P1", Some("missing")),
            &config,
        );
        assert!(result.is_err());
        assert!(!file.exists());
    }

    #[test]
    fn read_entries_requires_array() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("object.json");
        std::fs::write(&file, r#"{"id": "r1"}"#).unwrap();
        assert!(read_entries(&file).is_err());
        assert!(read_entries(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn search_criteria_from_flags() {
        let (_dir, file, a, b) = two_record_file();
        let loaded = load_ledger(&file, &LedgerConfig::default()).unwrap();
        let args = SearchArgs {
            file: file.clone(),
            product: Some("P1".into()),
            actor: None,
            event: Some(EventType::Shipping),
            from: None,
            to: None,
            location: Some("barn".into()),
        };
        let found = loaded.ledger.search_records(&criteria_from(&args));
        assert_eq!(found, vec![b.clone()]);

        let args = SearchArgs {
            file,
            product: None,
            actor: None,
            event: None,
            from: None,
            to: Some(a.timestamp),
            location: None,
        };
        let found = loaded.ledger.search_records(&criteria_from(&args));
        assert_eq!(found, vec![a]);
    }

    #[test]
    fn detail_values_parse_as_json_when_possible() {
        assert_eq!(parse_detail("n=3").unwrap(), ("n".into(), json!(3)));
        assert_eq!(parse_detail("s=plain").unwrap(), ("s".into(), json!("plain")));
        assert_eq!(parse_detail("e=").unwrap(), ("e".into(), json!("")));
        assert!(parse_detail("novalue").is_err());
        assert!(parse_detail("=x").is_err());
    }

    #[test]
    fn config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scl.toml");
        std::fs::write(&path, "network_id = \"test-net\"\nsignature_scheme = \"ed25519\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.network_id, "test-net");
        assert_eq!(config.signature_scheme, SignatureScheme::Ed25519);
        assert_eq!(load_config(None).unwrap(), LedgerConfig::default());
    }

    #[test]
    fn timestamps_render_as_utc() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00.000 UTC");
        assert_eq!(format_timestamp(u64::MAX), u64::MAX.to_string());
    }
}
