use serde::Deserialize;

use crate::completion::presence::FieldValue;
use crate::models::profile::Profile;

/// Every profile field the engine knows how to read.
///
/// Tables reference fields by key rather than by path, so a typo in a
/// category definition fails to parse instead of silently scoring as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Name,
    PrimarySport,
    Position,
    Level,
    Bio,
    ProfilePicture,
    DateOfBirth,
    Gender,
    Nationality,
    Country,
    City,
    Languages,
    Height,
    Weight,
    PreferredFoot,
    YearsOfExperience,
    CurrentClub,
    PreviousClubs,
    Achievements,
    Photos,
    Videos,
}

impl FieldKey {
    pub const ALL: [FieldKey; 21] = [
        FieldKey::Name,
        FieldKey::PrimarySport,
        FieldKey::Position,
        FieldKey::Level,
        FieldKey::Bio,
        FieldKey::ProfilePicture,
        FieldKey::DateOfBirth,
        FieldKey::Gender,
        FieldKey::Nationality,
        FieldKey::Country,
        FieldKey::City,
        FieldKey::Languages,
        FieldKey::Height,
        FieldKey::Weight,
        FieldKey::PreferredFoot,
        FieldKey::YearsOfExperience,
        FieldKey::CurrentClub,
        FieldKey::PreviousClubs,
        FieldKey::Achievements,
        FieldKey::Photos,
        FieldKey::Videos,
    ];

    pub fn default_label(self) -> &'static str {
        match self {
            FieldKey::Name => "Full Name",
            FieldKey::PrimarySport => "Primary Sport",
            FieldKey::Position => "Position",
            FieldKey::Level => "Level",
            FieldKey::Bio => "Bio",
            FieldKey::ProfilePicture => "Profile Photo",
            FieldKey::DateOfBirth => "Date of Birth",
            FieldKey::Gender => "Gender",
            FieldKey::Nationality => "Nationality",
            FieldKey::Country => "Country",
            FieldKey::City => "City",
            FieldKey::Languages => "Languages",
            FieldKey::Height => "Height",
            FieldKey::Weight => "Weight",
            FieldKey::PreferredFoot => "Preferred Foot",
            FieldKey::YearsOfExperience => "Years of Experience",
            FieldKey::CurrentClub => "Current Club",
            FieldKey::PreviousClubs => "Previous Clubs",
            FieldKey::Achievements => "Achievements",
            FieldKey::Photos => "Photos",
            FieldKey::Videos => "Videos",
        }
    }

    /// Reads this field out of `profile`. Absent parents resolve to an absent value.
    pub fn read(self, profile: &Profile) -> FieldValue<'_> {
        match self {
            FieldKey::Name => FieldValue::Text(profile.name.as_deref()),
            FieldKey::PrimarySport => FieldValue::Text(profile.primary_sport.as_deref()),
            FieldKey::Position => FieldValue::Text(profile.position.as_deref()),
            FieldKey::Level => FieldValue::Text(profile.level.as_deref()),
            FieldKey::Bio => FieldValue::Text(profile.bio.as_deref()),
            FieldKey::ProfilePicture => FieldValue::Text(profile.profile_picture.as_deref()),
            FieldKey::DateOfBirth => FieldValue::Date(profile.date_of_birth.as_ref()),
            FieldKey::Gender => FieldValue::Text(profile.gender.as_deref()),
            FieldKey::Nationality => FieldValue::Text(profile.nationality.as_deref()),
            FieldKey::Country => FieldValue::Text(
                profile
                    .location
                    .as_ref()
                    .and_then(|l| l.country.as_deref()),
            ),
            FieldKey::City => {
                FieldValue::Text(profile.location.as_ref().and_then(|l| l.city.as_deref()))
            }
            FieldKey::Languages => FieldValue::Collection(profile.languages.as_ref().map(Vec::len)),
            FieldKey::Height => FieldValue::Measurement(profile.height.as_ref()),
            FieldKey::Weight => FieldValue::Measurement(profile.weight.as_ref()),
            FieldKey::PreferredFoot => FieldValue::Text(profile.preferred_foot.as_deref()),
            FieldKey::YearsOfExperience => FieldValue::Number(profile.years_of_experience),
            FieldKey::CurrentClub => FieldValue::Text(profile.current_club.as_deref()),
            FieldKey::PreviousClubs => {
                FieldValue::Collection(profile.previous_clubs.as_ref().map(Vec::len))
            }
            FieldKey::Achievements => {
                FieldValue::Collection(profile.achievements.as_ref().map(Vec::len))
            }
            FieldKey::Photos => FieldValue::Collection(profile.photos.as_ref().map(Vec::len)),
            FieldKey::Videos => FieldValue::Collection(profile.videos.as_ref().map(Vec::len)),
        }
    }
}
