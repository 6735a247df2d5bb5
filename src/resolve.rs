use crate::{
    context::AmbientContext,
    error::{RespackError, RespackResult},
    locator::{PACK_PREFIX, ResourceLocator, combine_path, uri_segments},
};

/// Sentinel substituted for `EntryAssembly` when no entry module is known.
pub const ERROR_ENTRY_ASSEMBLY: &str = "ERROR-EntryAssembly-NotAvailable";

/// Sentinel substituted for `ExecutingAssembly` when no base location is known.
pub const ERROR_EXECUTING_ASSEMBLY: &str = "ERROR-ExecutingAssembly-NotAvailable";

/// Resolve a resource key and a parameter template into an absolute locator.
///
/// Priority order, first match wins:
/// 1. a relative template (leading `.`/`..`, or leading `/` without a
///    `;component/` marker) is rebased against the ambient base location,
/// 2. `{0}`, `{key}` or `{value}` in the template is replaced by `key`,
/// 3. otherwise template and key are joined as path segments,
/// 4. remaining `EntryAssembly`/`ExecutingAssembly` tokens are substituted
///    from the ambient context (sentinel on absence),
/// 5. the pack prefix is prepended unless already present.
///
/// A malformed template never fails: the result degrades to an error locator.
/// Only an empty `key` is a hard validation error.
#[tracing::instrument(skip(ctx))]
pub fn resolve(
    key: &str,
    parameter_template: Option<&str>,
    ctx: &AmbientContext,
) -> RespackResult<ResourceLocator> {
    if key.is_empty() {
        return Err(RespackError::validation("resource key not specified"));
    }

    let template = expand_template(parameter_template.unwrap_or(""), ctx);

    let url = if template.is_empty() {
        key.to_string()
    } else if template.contains("{0}") {
        template.replace("{0}", key)
    } else if template.contains("{key}") {
        template.replace("{key}", key)
    } else if template.contains("{value}") {
        template.replace("{value}", key)
    } else {
        combine_path(&template, key)
    };

    // Tokens can arrive through a directly-configured converter parameter,
    // not only through the template expansion above.
    let url = substitute_assembly_tokens(&url, ctx);

    let url = if url.starts_with(PACK_PREFIX) {
        url
    } else {
        combine_path(PACK_PREFIX, &url)
    };

    Ok(ResourceLocator::from_url(url))
}

/// Expand a raw parameter template against the ambient context.
///
/// Relative templates are rebased onto the base location; assembly-name
/// tokens are substituted. Non-relative, token-free templates pass through
/// unchanged. This is the construction-time step a converter builder applies
/// to its configured resource path.
pub fn expand_template(template: &str, ctx: &AmbientContext) -> String {
    let template = template.trim();
    if template.is_empty() {
        return String::new();
    }
    if template.starts_with('.')
        || (template.starts_with('/') && !template.contains(";component/"))
    {
        rebase_relative(template, ctx)
    } else {
        substitute_assembly_tokens(template, ctx)
    }
}

fn substitute_assembly_tokens(url: &str, ctx: &AmbientContext) -> String {
    let mut url = url.to_string();
    // The sentinels themselves contain the token names; a second pass must
    // leave them intact.
    if url.contains("EntryAssembly") && !url.contains(ERROR_ENTRY_ASSEMBLY) {
        let name = ctx
            .entry_module()
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| ERROR_ENTRY_ASSEMBLY.to_string());
        url = url.replace("EntryAssembly", &name);
    }
    if url.contains("ExecutingAssembly") && !url.contains(ERROR_EXECUTING_ASSEMBLY) {
        let name = ctx
            .base_module_name()
            .unwrap_or_else(|| ERROR_EXECUTING_ASSEMBLY.to_string());
        url = url.replace("ExecutingAssembly", &name);
    }
    url
}

fn rebase_relative(template: &str, ctx: &AmbientContext) -> String {
    let Some(base) = ctx.base_location() else {
        return combine_path(&format!("{ERROR_EXECUTING_ASSEMBLY};component"), template);
    };
    let base_segments = uri_segments(base);
    if base_segments.len() < 2 {
        return combine_path(&format!("{ERROR_EXECUTING_ASSEMBLY};component"), template);
    }

    if template.starts_with("..") {
        let parts: Vec<&str> = template.split('/').collect();
        let back_count = parts.iter().take_while(|s| **s == "..").count();
        let depth = base_segments.len() - 1;
        if depth < back_count + 2 {
            // Fell past the module root. Keep the module segment and the
            // original template; the residual `..` marks the locator as an
            // error locator.
            return combine_path(&format!("/{}", base_segments[1]), template);
        }
        let folder: String = base_segments[..depth - back_count].concat();
        let rest = parts[back_count..].join("/");
        combine_path(&folder, &rest)
    } else if let Some(rest) = template.strip_prefix('.') {
        let folder: String = base_segments[..base_segments.len() - 1].concat();
        combine_path(&folder, rest)
    } else {
        // Only `.`- and `/`-prefixed templates reach this function; a bare
        // leading `/` (no `;component/` marker) is module-root relative.
        let rest = template.strip_prefix('/').unwrap_or(template);
        let module_root: String = base_segments[..2].concat();
        combine_path(&module_root, rest)
    }
}
