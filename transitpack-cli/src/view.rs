//! Plain-text rendering of parsed descriptors and project models.

use transitpack::{Descriptor, ProjectModel};

pub fn print_descriptor(descriptor: &Descriptor) {
    for section in &descriptor.sections {
        println!("[{}]", section.name);
        for (key, value) in &section.pairs {
            println!("  {} = {}", key, value);
        }
    }
}

pub fn print_model(model: &ProjectModel) {
    match &model.name {
        Some(name) => println!("Project: {}", name),
        None => println!("Project: (unnamed)"),
    }

    if model.language_pairs.is_empty() {
        println!("No language pairs.");
        return;
    }

    for pair in &model.language_pairs {
        let source = pair
            .source_language
            .as_ref()
            .map_or_else(|| "?".to_string(), |l| l.to_string());
        let target = pair
            .target_language
            .as_ref()
            .map_or_else(|| "?".to_string(), |l| l.to_string());
        println!("{} -> {}", source, target);

        for file in &pair.source_files {
            println!("  source: {}", file.display());
        }
        for file in &pair.target_files {
            println!("  target: {}", file.display());
        }
        for tm in &pair.tm_metadata {
            match &tm.target_file {
                Some(target_file) => println!(
                    "  tm {}: {} <-> {}",
                    tm.id,
                    tm.source_file.display(),
                    target_file.display()
                ),
                None => println!("  tm {}: {} (no target)", tm.id, tm.source_file.display()),
            }
        }
    }
}
