use std::path::PathBuf;

pub(crate) fn run(root: PathBuf, format: super::Format) {
    let results = aicat::validate_collections(&root);

    if results.is_empty() {
        // Nothing to validate is not a failure.
        eprintln!("No collection files found - validation skipped");
        if matches!(format, super::Format::Json) {
            println!("[]");
        }
        return;
    }

    let has_errors = results
        .iter()
        .any(|(_, diags)| diags.iter().any(|d| d.is_error()));

    match format {
        super::Format::Text => {
            eprintln!("Validating {} collection files...", results.len());
            for (file, diags) in &results {
                let name = file
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default();
                if diags.is_empty() {
                    eprintln!("✅ {name} is valid");
                } else {
                    eprintln!("❌ Validation errors in {name}:");
                    for d in diags {
                        eprintln!("   - {d}");
                    }
                }
            }
            if has_errors {
                eprintln!("\n❌ Collection validation failed");
            } else {
                eprintln!("\n✅ All {} collections are valid", results.len());
            }
        }
        super::Format::Json => {
            let entries: Vec<serde_json::Value> = results
                .iter()
                .map(|(file, diags)| {
                    serde_json::json!({
                        "path": file.display().to_string(),
                        "diagnostics": diags,
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).unwrap();
            println!("{json}");
        }
    }

    if has_errors {
        std::process::exit(1);
    }
}
