//! List-query policy: translates validated list params into a filter
//! predicate, a sort order, and a page window.
//!
//! Nothing here fails. Unknown sort fields degrade to the default order and
//! blank filter terms impose no condition, so request input can never steer
//! the query outside the fixed allow-list below.

use crate::features::categories::dtos::ListCategoriesQuery;

/// Filter over category rows. `search` takes priority: when present the
/// per-field `name`/`description` terms are ignored and the predicate is
/// `name CONTAINS search OR description CONTAINS search`. All other
/// conditions combine with AND. Containment is case-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPredicate {
    pub search: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

/// Fixed allow-list of sortable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Description,
    Active,
    CreatedDate,
}

impl SortField {
    /// Parse an API-facing field name. Anything outside the allow-list is
    /// `None`, which callers turn into the default order.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "description" => Some(SortField::Description),
            "active" => Some(SortField::Active),
            "createdDate" => Some(SortField::CreatedDate),
            _ => None,
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Description => "description",
            SortField::Active => "active",
            SortField::CreatedDate => "created_date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            field: SortField::CreatedDate,
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl ListCategoriesQuery {
    /// Build the row filter. `search` wins over the per-field terms.
    pub fn predicate(&self) -> CategoryPredicate {
        let mut predicate = CategoryPredicate {
            active: self.active,
            ..Default::default()
        };

        if let Some(search) = non_blank(self.search.as_deref()) {
            predicate.search = Some(search);
        } else {
            predicate.name = non_blank(self.name.as_deref());
            predicate.description = non_blank(self.description.as_deref());
        }

        predicate
    }

    /// Resolve the sort specifier. A leading `-` means descending; fields
    /// outside the allow-list silently fall back to `createdDate DESC`.
    pub fn sort_order(&self) -> SortOrder {
        let Some(spec) = non_blank(self.sort.as_deref()) else {
            return SortOrder::default();
        };

        let (candidate, direction) = match spec.strip_prefix('-') {
            Some(rest) => (rest, SortDirection::Desc),
            None => (spec.as_str(), SortDirection::Asc),
        };

        match SortField::parse(candidate) {
            Some(field) => SortOrder { field, direction },
            None => SortOrder::default(),
        }
    }

    /// Compute the page window. Pages 0 and 1 both map to offset 0; page N
    /// (N >= 2) starts at `pageSize * (N - 1)`. The multiply saturates so an
    /// absurd page number yields an empty page, never a wrapped offset.
    pub fn page_window(&self) -> PageWindow {
        let offset = if self.page <= 1 {
            0
        } else {
            self.page_size.saturating_mul(self.page - 1)
        };

        PageWindow {
            limit: self.page_size,
            offset,
        }
    }
}
