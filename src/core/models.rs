use std::collections::HashMap;

/// Timezone facts for a single channel member, as resolved by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTimezone {
    /// Display label of the zone ("Eastern Daylight Time"). Opaque: never an
    /// IANA name, never parsed.
    pub label: String,
    /// Signed offset from UTC in seconds. Fractional-hour zones are ordinary
    /// values here (e.g. -16200).
    pub utc_offset_seconds: i32,
    pub display_name: String,
}

/// Channel members aggregated by distinct timezone label.
///
/// Labels keep first-seen insertion order, so the reply lists timezones in
/// the order members were enumerated. The representative offset for a label
/// is first-seen-wins: a member whose offset disagrees with the label's is
/// still listed under it. Invariant: every label in `order` has both an
/// offset and a name list.
#[derive(Debug, Default)]
pub struct ChannelTimezones {
    order: Vec<String>,
    offsets: HashMap<String, i32>,
    names: HashMap<String, Vec<String>>,
}

impl ChannelTimezones {
    pub fn insert(&mut self, member: MemberTimezone) {
        if !self.offsets.contains_key(&member.label) {
            self.order.push(member.label.clone());
            self.offsets
                .insert(member.label.clone(), member.utc_offset_seconds);
        }
        self.names
            .entry(member.label)
            .or_default()
            .push(member.display_name);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Iterate `(label, offset, display names)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32, &[String])> {
        self.order.iter().map(|label| {
            (
                label.as_str(),
                self.offsets.get(label).copied().unwrap_or_default(),
                self.names.get(label).map_or(&[][..], Vec::as_slice),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(label: &str, offset: i32, name: &str) -> MemberTimezone {
        MemberTimezone {
            label: label.to_string(),
            utc_offset_seconds: offset,
            display_name: name.to_string(),
        }
    }

    #[test]
    fn test_insertion_order_and_name_grouping() {
        let mut tz = ChannelTimezones::default();
        tz.insert(member("Pacific Daylight Time", -25200, "ana"));
        tz.insert(member("Eastern Daylight Time", -14400, "bob"));
        tz.insert(member("Pacific Daylight Time", -25200, "dan"));

        let entries: Vec<_> = tz.iter().collect();
        assert_eq!(entries.len(), 2, "two distinct labels expected");
        assert_eq!(entries[0].0, "Pacific Daylight Time");
        assert_eq!(entries[0].2, ["ana".to_string(), "dan".to_string()]);
        assert_eq!(entries[1].0, "Eastern Daylight Time");
    }

    #[test]
    fn test_first_seen_offset_wins() {
        let mut tz = ChannelTimezones::default();
        tz.insert(member("Eastern Daylight Time", -14400, "bob"));
        // A disagreeing member is grouped, not re-offset.
        tz.insert(member("Eastern Daylight Time", -18000, "eve"));

        let entries: Vec<_> = tz.iter().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, -14400, "first-seen offset must win");
        assert_eq!(entries[0].2.len(), 2);
    }

    #[test]
    fn test_empty_aggregate() {
        let tz = ChannelTimezones::default();
        assert!(tz.is_empty());
        assert_eq!(tz.len(), 0);
        assert_eq!(tz.iter().count(), 0);
    }
}
