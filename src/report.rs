use crate::options::ScanOptions;
use crate::scan::ScanResult;
use std::fmt::Write;

const PASSWORD_MASK: &str = "******";

pub fn format_banner(options: &ScanOptions) -> String {
    format!(
        "Scanning:\n \
         - Host: {}\n \
         - Port: {}\n \
         - Query Port: {}\n \
         - User: {}\n \
         - Password: {PASSWORD_MASK}\n\n",
        options.host, options.serverport, options.queryport, options.user,
    )
}

pub fn format_report(result: &ScanResult) -> String {
    if result.is_empty() {
        return "No HTTP links found.\n".to_string();
    }

    let mut out = String::new();
    write_section(
        &mut out,
        "The following server properties contain insecure HTTP links:",
        &result.properties,
    );
    write_section(
        &mut out,
        "The following channels contain insecure HTTP links:",
        &result.channels,
    );
    out.push_str("Done.\n");
    out
}

fn write_section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{heading}");
    for item in items {
        let _ = writeln!(out, " - {item}");
    }
    out.push('\n');
}
