//! Optional prefix filters over a rental's related records.
//!
//! A [`RentalFilter`] holds up to five optional strings. It is turned into an
//! explicit list of [`RentalPredicate`]s, one per non-blank value, and the list
//! is combined with logical AND. Repositories consume the list: the PostgreSQL
//! repository renders each predicate as a `LIKE` clause, the in-memory one
//! evaluates [`RentalPredicate::matches`] directly.

/// Related-record field a predicate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    CustomerFirstName,
    CustomerLastName,
    FilmTitle,
    StaffFirstName,
    StaffLastName,
}

impl FilterField {
    /// Qualified column name in the joined rental query.
    pub fn column(self) -> &'static str {
        match self {
            FilterField::CustomerFirstName => "c.first_name",
            FilterField::CustomerLastName => "c.last_name",
            FilterField::FilmTitle => "f.title",
            FilterField::StaffFirstName => "s.first_name",
            FilterField::StaffLastName => "s.last_name",
        }
    }

    fn value(self, parties: &RentalParties) -> &str {
        match self {
            FilterField::CustomerFirstName => &parties.customer_first_name,
            FilterField::CustomerLastName => &parties.customer_last_name,
            FilterField::FilmTitle => &parties.film_title,
            FilterField::StaffFirstName => &parties.staff_first_name,
            FilterField::StaffLastName => &parties.staff_last_name,
        }
    }
}

/// Names of the records a rental points at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RentalParties {
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub film_title: String,
    pub staff_first_name: String,
    pub staff_last_name: String,
}

/// "Field starts with prefix" (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalPredicate {
    pub field: FilterField,
    pub prefix: String,
}

impl RentalPredicate {
    pub fn new(field: FilterField, prefix: impl Into<String>) -> Self {
        Self {
            field,
            prefix: prefix.into(),
        }
    }

    pub fn matches(&self, parties: &RentalParties) -> bool {
        self.field.value(parties).starts_with(self.prefix.as_str())
    }

    /// Prefix as a `LIKE` pattern, with `\`, `%` and `_` escaped so the input
    /// only ever matches literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.prefix.len() + 1);
        for ch in self.prefix.chars() {
            if matches!(ch, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

/// Optional filter values for listing rentals.
///
/// `None`, empty and whitespace-only values impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentalFilter {
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub film_title: Option<String>,
    pub staff_first_name: Option<String>,
    pub staff_last_name: Option<String>,
}

impl RentalFilter {
    /// One predicate per supplied value, in a fixed field order.
    pub fn predicates(&self) -> Vec<RentalPredicate> {
        [
            (FilterField::CustomerFirstName, &self.customer_first_name),
            (FilterField::CustomerLastName, &self.customer_last_name),
            (FilterField::FilmTitle, &self.film_title),
            (FilterField::StaffFirstName, &self.staff_first_name),
            (FilterField::StaffLastName, &self.staff_last_name),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| RentalPredicate::new(field, v))
        })
        .collect()
    }

    /// AND of every predicate; an empty filter matches everything.
    pub fn matches(&self, parties: &RentalParties) -> bool {
        self.predicates().iter().all(|p| p.matches(parties))
    }
}
