//! Statically embedded template and extras catalogs.
//!
//! The order of [`TEMPLATES`] is the order shown by the template prompt and the
//! first entry is the default selection. Extras are always applied in the
//! order they are listed for their template.

/// A selectable catalog entry: a display title and the directory name it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub title: &'static str,
    pub id: &'static str,
}

/// Templates bundled under `templates/<id>/`.
pub const TEMPLATES: &[Entry] = &[
    Entry { title: "Nextjs ts with db setup Landing (Prisma)", id: "nextjs-ts-landing-prisma" },
    Entry { title: "Nextjs ts with db setup Landing (Drizzle)", id: "nextjs-ts-landing-drizzle" },
    Entry { title: "Nextjs ts clean", id: "nextjs-ts-clean" },
    Entry { title: "Next + ESLint + TS + shadcn/ui", id: "next-eslint-ts-shadcn" },
];

const SHADCN_EXTRAS: &[Entry] = &[
    Entry { title: "Clerk Auth", id: "clerk" },
    Entry { title: "Auth0", id: "auth0" },
    Entry { title: "Supabase", id: "supabase" },
    Entry { title: "libSQL + Drizzle", id: "libsql" },
];

/// Extras offered for `template_id`, or `None` when the template has no extras entry.
pub fn extras_for(template_id: &str) -> Option<&'static [Entry]> {
    match template_id {
        "next-eslint-ts-shadcn" => Some(SHADCN_EXTRAS),
        _ => None,
    }
}

/// Position of `template_id` in [`TEMPLATES`].
pub fn template_index(template_id: &str) -> Option<usize> {
    TEMPLATES.iter().position(|entry| entry.id == template_id)
}

/// Resolves a command-line template reference, which is either a template id
/// or a catalog index.
pub fn lookup_template(reference: &str) -> Option<&'static Entry> {
    if let Some(index) = template_index(reference) {
        return TEMPLATES.get(index);
    }
    reference.parse::<usize>().ok().and_then(|index| TEMPLATES.get(index))
}

/// Orders `selected` by their position in the template's extras catalog and
/// drops duplicates. Returns the first id that is not in the catalog as `Err`.
pub fn normalize_extras<S: AsRef<str>>(
    template_id: &str,
    selected: &[S],
) -> std::result::Result<Vec<&'static str>, String> {
    let catalog = extras_for(template_id).unwrap_or_default();
    if let Some(unknown) =
        selected.iter().find(|id| !catalog.iter().any(|entry| entry.id == id.as_ref()))
    {
        return Err(unknown.as_ref().to_string());
    }

    Ok(catalog
        .iter()
        .filter(|entry| selected.iter().any(|id| id.as_ref() == entry.id))
        .map(|entry| entry.id)
        .collect())
}
