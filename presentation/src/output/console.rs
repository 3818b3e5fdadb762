//! Console output formatter for stockroom results

use colored::Colorize;
use serde::Serialize;
use stockroom_application::{BuildOutcome, Deduction, DeductionStatus};
use stockroom_domain::{Resource, User};

/// Formats stockroom results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a list of resources of one kind
    pub fn format_resource_list(title: &str, resources: &[Resource]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(title));
        output.push('\n');

        if resources.is_empty() {
            output.push_str(&format!("{}\n", "(none)".dimmed()));
        }
        for resource in resources {
            output.push_str(&Self::format_resource(resource));
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a single resource with its kind-specific fields
    pub fn format_resource(resource: &Resource) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            format!("── {} ──", resource.name()).yellow().bold(),
            format!("[{}]", resource.id()).dimmed()
        ));
        output.push_str(&format!(
            "  amount: {}   cost: {:.2}   worth: {:.2}\n",
            resource.amount(),
            resource.cost(),
            resource.worth()
        ));

        match resource {
            Resource::Tool(tool) => {
                let condition = format!("{}/100", tool.condition);
                let condition = if tool.usable() {
                    condition.green()
                } else {
                    condition.red()
                };
                output.push_str(&format!(
                    "  usage: {}   condition: {}\n",
                    tool.usage,
                    condition.bold()
                ));
                if !tool.borrowed_by.is_empty() {
                    output.push_str(&format!("  times used: {}\n", tool.borrowed_by.len()));
                }
            }
            Resource::Material(material) => {
                output.push_str(&format!(
                    "  supplier: {}   quality: {}\n",
                    material.supplier, material.quality
                ));
            }
        }

        output
    }

    /// Format a user record
    pub fn format_user(user: &User) -> String {
        format!(
            "{} {}\n  age: {}   tools used: {}\n",
            format!("── {} ──", user.name).yellow().bold(),
            format!("[{}]", user.id).dimmed(),
            user.age,
            user.used_tools.len()
        )
    }

    /// Format a build outcome, including the per-material commit report
    pub fn format_build(outcome: &BuildOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Build Report"));
        output.push('\n');

        output.push_str(&format!("{}\n", outcome.message.green().bold()));

        if !outcome.deductions.is_empty() {
            output.push_str(&Self::section_header("Materials Consumed"));
            for deduction in &outcome.deductions {
                output.push_str(&Self::format_deduction(deduction));
            }
        }

        if !outcome.missing.is_empty() {
            output.push_str(&Self::section_header("Not In Inventory"));
            for name in &outcome.missing {
                output.push_str(&format!("  * {}\n", name.yellow()));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_deduction(deduction: &Deduction) -> String {
        match &deduction.outcome {
            DeductionStatus::Applied { new_amount } => format!(
                "  {} {} x {} ({} left)\n",
                "-".green().bold(),
                deduction.requested,
                deduction.name,
                new_amount
            ),
            DeductionStatus::Skipped { available } => format!(
                "  {} {} x {} (only {} available, skipped)\n",
                "!".yellow().bold(),
                deduction.requested,
                deduction.name,
                available
            ),
            DeductionStatus::Failed { error } => format!(
                "  {} {} x {} ({})\n",
                "x".red().bold(),
                deduction.requested,
                deduction.name,
                error
            ),
        }
    }

    /// Format the list of tool names a user has used
    pub fn format_used_tools(names: &[String]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Tools Used:".cyan().bold()));
        if names.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for name in names {
            output.push_str(&format!("  * {}\n", name));
        }

        output
    }

    /// Format any serializable result as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_domain::{Material, Tool};

    fn sample_tool() -> Resource {
        Tool::new("Hammer", 2, 10.0, "Driving nails", 40).unwrap().into()
    }

    fn sample_material() -> Resource {
        Material::new("Wood", 20, 1.5, "Forest Co", "standard")
            .unwrap()
            .into()
    }

    #[test]
    fn tool_listing_shows_condition_and_worth() {
        let text = ConsoleFormatter::format_resource(&sample_tool());
        assert!(text.contains("Hammer"));
        assert!(text.contains("40/100"));
        assert!(text.contains("worth: 20.00"));
    }

    #[test]
    fn material_listing_shows_supplier() {
        let text = ConsoleFormatter::format_resource(&sample_material());
        assert!(text.contains("Forest Co"));
        assert!(text.contains("standard"));
    }

    #[test]
    fn empty_list_is_marked() {
        let text = ConsoleFormatter::format_resource_list("Tools", &[]);
        assert!(text.contains("(none)"));
    }

    #[test]
    fn json_output_is_valid() {
        let text = ConsoleFormatter::format_json(&sample_material());
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["type"], "Material");
        assert_eq!(parsed["name"], "Wood");
    }

    #[test]
    fn used_tools_lists_names_in_order() {
        let names = vec!["Hammer".to_string(), "Saw".to_string()];
        let text = ConsoleFormatter::format_used_tools(&names);
        let hammer = text.find("Hammer").unwrap();
        let saw = text.find("Saw").unwrap();
        assert!(hammer < saw);
    }
}
