//! Colored field-by-field view of a config: magenta section headers,
//! entries rendered as YAML blocks alternating plain and cyan so adjacent
//! entries are easy to tell apart.

use console::style;
use serde::Serialize;

use kubeconf::KubeConfig;

pub fn pretty_print(conf: &KubeConfig) -> anyhow::Result<()> {
    println!("{}{}", style("apiVersion: ").magenta(), conf.api_version);
    println!("{}{}", style("kind: ").magenta(), conf.kind);

    println!("{}", style("clusters:").magenta());
    print_entries(&conf.clusters)?;

    println!("{}", style("contexts:").magenta());
    print_entries(&conf.contexts)?;

    println!("{}{}", style("current-context: ").magenta(), conf.current_context);

    println!("{}", style("users:").magenta());
    print_entries(&conf.users)?;

    print!("{}", style("preferences:").magenta());
    if conf.preferences.is_null() {
        println!(" {{}}");
    } else {
        println!();
        print!("{}", entry_yaml(&conf.preferences)?);
    }

    Ok(())
}

fn print_entries<T: Serialize>(entries: &[T]) -> anyhow::Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        let block = entry_yaml(entry)?;
        if i % 2 == 0 {
            print!("{block}");
        } else {
            print!("{}", style(block).cyan());
        }
    }
    Ok(())
}

/// One value as a bare YAML block, without the `---` document marker the
/// serializer prepends.
fn entry_yaml<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let text = serde_yaml::to_string(value)?;
    Ok(text.trim_start_matches("---\n").to_string())
}
