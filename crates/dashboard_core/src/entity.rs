use std::fmt;
use std::str::FromStr;

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Freelancers,
    Jobs,
    News,
    Orders,
    Products,
    Purchases,
    Vendors,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Freelancers,
        EntityKind::Jobs,
        EntityKind::News,
        EntityKind::Orders,
        EntityKind::Products,
        EntityKind::Purchases,
        EntityKind::Vendors,
    ];

    /// Page heading, e.g. "Freelancers".
    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Freelancers => "Freelancers",
            EntityKind::Jobs => "Jobs",
            EntityKind::News => "News",
            EntityKind::Orders => "Orders",
            EntityKind::Products => "Products",
            EntityKind::Purchases => "Purchases",
            EntityKind::Vendors => "Vendors",
        }
    }

    /// Singular noun used in acknowledgements, e.g. "Edit job with id: 3".
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Freelancers => "freelancer",
            EntityKind::Jobs => "job",
            EntityKind::News => "news",
            EntityKind::Orders => "order",
            EntityKind::Products => "product",
            EntityKind::Purchases => "purchase",
            EntityKind::Vendors => "vendor",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A record type that can be shown by the generic list controller.
///
/// Implementors name the text fields searched by the search box, the facet
/// the filter select compares against, and how a row renders as table cells.
pub trait ListEntity: Clone + fmt::Debug + PartialEq {
    type Id: Clone + Eq + fmt::Debug + fmt::Display + FromStr;
    type Facet: Clone + Eq + fmt::Debug + fmt::Display;

    const KIND: EntityKind;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> &Self::Id;

    /// Fields matched by the case-insensitive substring search.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against an `Only(..)` filter.
    fn facet(&self) -> Self::Facet;

    /// Display cells, one per entry in `COLUMNS`.
    fn cells(&self) -> Vec<String>;

    /// Filter choices offered besides `All`.
    ///
    /// The default collects the distinct facets of `records` in first-seen
    /// order; entities with a closed set of statuses override it.
    fn facet_options(records: &[Self]) -> Vec<Self::Facet> {
        let mut options: Vec<Self::Facet> = Vec::new();
        for record in records {
            let facet = record.facet();
            if !options.contains(&facet) {
                options.push(facet);
            }
        }
        options
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter<F> {
    #[default]
    All,
    Only(F),
}

impl<F: PartialEq> Filter<F> {
    pub fn matches(&self, facet: &F) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == facet,
        }
    }
}

impl<F: fmt::Display> Filter<F> {
    /// Resolves select-box text against the offered options.
    ///
    /// "All" (any case) maps to `Filter::All`; other values must equal the
    /// display form of an option, ignoring ASCII case.
    pub fn parse(raw: &str, options: &[F]) -> Option<Filter<F>>
    where
        F: Clone,
    {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("all") {
            return Some(Filter::All);
        }
        options
            .iter()
            .find(|option| option.to_string().eq_ignore_ascii_case(raw))
            .cloned()
            .map(Filter::Only)
    }
}

impl<F: fmt::Display> fmt::Display for Filter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Only(facet) => facet.fmt(f),
        }
    }
}

/// Case-insensitive substring test over the entity's search fields.
pub fn matches_search<E: ListEntity>(record: &E, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
