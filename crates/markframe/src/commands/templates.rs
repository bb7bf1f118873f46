//! List the template catalog.

use markframe_render::templates;

pub fn run() -> anyhow::Result<()> {
    for template in templates() {
        println!("{}  {} - {}", template.id, template.name, template.description);
    }
    Ok(())
}
