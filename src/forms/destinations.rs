//! Query string accepted by the federation destinations listing.

use std::str::FromStr;

use serde::Deserialize;
use validator::Validate;

use crate::domain::destination::{DestinationSortOrder, Direction};
use crate::forms::FormError;
use crate::repository::DestinationListQuery;

/// Page size used when the caller does not send `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// Raw query parameters, kept as strings so that every malformed value is
/// reported with the listing's own error codes.
#[derive(Debug, Default, Deserialize)]
pub struct DestinationsQueryForm {
    pub from: Option<String>,
    pub limit: Option<String>,
    pub destination: Option<String>,
    pub order_by: Option<String>,
    pub dir: Option<String>,
}

#[derive(Debug, Validate)]
struct PageBounds {
    #[validate(range(min = 0))]
    from: i64,
    #[validate(range(min = 0))]
    limit: i64,
}

fn not_a_positive_integer(name: &str) -> FormError {
    FormError::InvalidParameter(format!(
        "Query parameter {name} must be a string representing a positive integer."
    ))
}

fn parse_integer(name: &str, raw: Option<&str>, default: i64) -> Result<i64, FormError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| not_a_positive_integer(name)),
    }
}

fn parse_choice<T: FromStr + Default>(
    name: &str,
    raw: Option<&str>,
    allowed: &[&str],
) -> Result<T, FormError> {
    match raw {
        None => Ok(T::default()),
        Some(value) => value.parse().map_err(|_| {
            FormError::UnrecognizedValue(format!(
                "Query parameter \"{name}\" must be one of [{}]",
                allowed.join(", ")
            ))
        }),
    }
}

impl TryFrom<DestinationsQueryForm> for DestinationListQuery {
    type Error = FormError;

    /// Checks `from` and `limit` before the enumerated parameters, so a
    /// negative number is reported as such whatever else is wrong.
    fn try_from(form: DestinationsQueryForm) -> Result<Self, Self::Error> {
        let bounds = PageBounds {
            from: parse_integer("from", form.from.as_deref(), 0)?,
            limit: parse_integer("limit", form.limit.as_deref(), DEFAULT_LIMIT)?,
        };

        bounds.validate().map_err(|errors| {
            if errors.field_errors().contains_key("from") {
                not_a_positive_integer("from")
            } else {
                not_a_positive_integer("limit")
            }
        })?;

        // Validated as non-negative; anything past usize saturates.
        let start = usize::try_from(bounds.from).unwrap_or(usize::MAX);
        let limit = usize::try_from(bounds.limit).unwrap_or(usize::MAX);

        let order_names = DestinationSortOrder::ALL.map(|order| order.as_str());
        let order_by: DestinationSortOrder =
            parse_choice("order_by", form.order_by.as_deref(), &order_names)?;

        let direction_names = Direction::ALL.map(|direction| direction.as_str());
        let direction: Direction = parse_choice("dir", form.dir.as_deref(), &direction_names)?;

        let mut query = DestinationListQuery::new()
            .order_by(order_by, direction)
            .paginate(start, limit);

        if let Some(filter) = form.destination.filter(|filter| !filter.is_empty()) {
            query = query.destination(filter);
        }

        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Pagination;

    fn form(pairs: &[(&str, &str)]) -> DestinationsQueryForm {
        let mut form = DestinationsQueryForm::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "from" => form.from = value,
                "limit" => form.limit = value,
                "destination" => form.destination = value,
                "order_by" => form.order_by = value,
                "dir" => form.dir = value,
                other => panic!("unexpected key {other}"),
            }
        }
        form
    }

    fn is_invalid_param(result: Result<DestinationListQuery, FormError>) -> bool {
        matches!(result, Err(FormError::InvalidParameter(_)))
    }

    fn is_unrecognized(result: Result<DestinationListQuery, FormError>) -> bool {
        matches!(result, Err(FormError::UnrecognizedValue(_)))
    }

    #[test]
    fn defaults_apply_when_nothing_is_sent() {
        let query = DestinationListQuery::try_from(form(&[])).unwrap();
        assert_eq!(
            query.pagination,
            Some(Pagination {
                start: 0,
                limit: 100
            })
        );
        assert_eq!(query.order_by, DestinationSortOrder::Destination);
        assert_eq!(query.direction, Direction::Forward);
        assert_eq!(query.destination, None);
    }

    #[test]
    fn every_parameter_is_carried_into_the_query() {
        let query = DestinationListQuery::try_from(form(&[
            ("from", "7"),
            ("limit", "3"),
            ("destination", "matrix"),
            ("order_by", "failure_ts"),
            ("dir", "b"),
        ]))
        .unwrap();
        assert_eq!(
            query.pagination,
            Some(Pagination { start: 7, limit: 3 })
        );
        assert_eq!(query.destination.as_deref(), Some("matrix"));
        assert_eq!(query.order_by, DestinationSortOrder::FailureTs);
        assert_eq!(query.direction, Direction::Backward);
    }

    #[test]
    fn largest_integers_are_accepted() {
        let query = DestinationListQuery::try_from(form(&[
            ("from", "9223372036854775807"),
            ("limit", "9223372036854775807"),
        ]))
        .unwrap();
        let expected = usize::try_from(i64::MAX).unwrap_or(usize::MAX);
        assert_eq!(
            query.pagination,
            Some(Pagination {
                start: expected,
                limit: expected
            })
        );
    }

    #[test]
    fn zero_limit_is_accepted() {
        let query = DestinationListQuery::try_from(form(&[("limit", "0")])).unwrap();
        assert_eq!(query.pagination.map(|p| p.limit), Some(0));
    }

    #[test]
    fn negative_numbers_are_invalid_params() {
        assert!(is_invalid_param(DestinationListQuery::try_from(form(&[(
            "from", "-5"
        )]))));
        assert!(is_invalid_param(DestinationListQuery::try_from(form(&[(
            "limit", "-5"
        )]))));
    }

    #[test]
    fn non_integers_are_invalid_params() {
        assert!(is_invalid_param(DestinationListQuery::try_from(form(&[(
            "from", "abc"
        )]))));
        assert!(is_invalid_param(DestinationListQuery::try_from(form(&[(
            "limit", "1.5"
        )]))));
        assert!(is_invalid_param(DestinationListQuery::try_from(form(&[(
            "limit", ""
        )]))));
    }

    #[test]
    fn negative_numbers_win_over_bad_enums() {
        let result = DestinationListQuery::try_from(form(&[
            ("limit", "-1"),
            ("order_by", "bar"),
            ("dir", "bar"),
        ]));
        assert_eq!(
            result,
            Err(FormError::InvalidParameter(
                "Query parameter limit must be a string representing a positive integer."
                    .to_string()
            ))
        );
    }

    #[test]
    fn negative_from_is_named_in_the_message() {
        let result = DestinationListQuery::try_from(form(&[("from", "-1"), ("limit", "-1")]));
        assert_eq!(
            result,
            Err(FormError::InvalidParameter(
                "Query parameter from must be a string representing a positive integer."
                    .to_string()
            ))
        );
    }

    #[test]
    fn unknown_enum_values_are_unrecognized() {
        assert!(is_unrecognized(DestinationListQuery::try_from(form(&[(
            "order_by", "bar"
        )]))));
        assert!(is_unrecognized(DestinationListQuery::try_from(form(&[(
            "dir", "bar"
        )]))));
        assert!(is_unrecognized(DestinationListQuery::try_from(form(&[(
            "dir", "F"
        )]))));
    }

    #[test]
    fn unrecognized_message_lists_allowed_values() {
        let result = DestinationListQuery::try_from(form(&[("dir", "x")]));
        assert_eq!(
            result,
            Err(FormError::UnrecognizedValue(
                "Query parameter \"dir\" must be one of [f, b]".to_string()
            ))
        );
    }

    #[test]
    fn empty_destination_filter_is_dropped() {
        let query = DestinationListQuery::try_from(form(&[("destination", "")])).unwrap();
        assert_eq!(query.destination, None);
    }
}
