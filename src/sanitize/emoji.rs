// Deterministic emoji avatars for minor authors.
//
// The avatar is picked by hashing the string form of the author id and
// indexing into a fixed, ordered pool. Collisions between ids are expected.
// The hash recurrence matches the one the platform has always used, so
// existing authors keep the same avatar.

use crate::models::AuthorId;

/// Glyphs used for minor-author avatars, in index order.
pub const DEFAULT_EMOJI: [&str; 10] = [
    "🦊", "🐼", "🦁", "🐯", "🐨", "🐸", "🦉", "🐙", "🦋", "🐢",
];

/// Avatar shown for adults who have not uploaded a photo.
pub const DEFAULT_ADULT_AVATAR: &str = "👤";

/// The avatar pool used by the sanitizer.
///
/// Built from configuration by `Config::load`.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarPool {
    /// Ordered emoji list. Never empty.
    emoji: Vec<String>,
    /// Fallback avatar for adults without a profile photo.
    pub default_avatar: String,
}

impl Default for AvatarPool {
    fn default() -> Self {
        Self {
            emoji: DEFAULT_EMOJI.iter().map(|e| e.to_string()).collect(),
            default_avatar: DEFAULT_ADULT_AVATAR.to_string(),
        }
    }
}

impl AvatarPool {
    /// Build a pool from a custom emoji list. Blank entries are dropped and
    /// an empty list falls back to the stock glyphs. A blank default avatar
    /// falls back to the stock one.
    pub fn new(emoji: Vec<String>, default_avatar: String) -> Self {
        let emoji: Vec<String> = emoji
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        let emoji = if emoji.is_empty() {
            DEFAULT_EMOJI.iter().map(|e| e.to_string()).collect()
        } else {
            emoji
        };
        let default_avatar = match default_avatar.trim() {
            "" => DEFAULT_ADULT_AVATAR.to_string(),
            trimmed => trimmed.to_string(),
        };
        Self {
            emoji,
            default_avatar,
        }
    }

    pub fn emoji(&self) -> &[String] {
        &self.emoji
    }

    pub fn len(&self) -> usize {
        self.emoji.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emoji.is_empty()
    }
}

/// Rolling 32-bit hash over UTF-16 code units: `h = h * 31 + unit`,
/// wrapping at every step.
pub fn rolling_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Pick the avatar emoji for an author id. Same id, same emoji.
pub fn assign_emoji<'a>(id: &AuthorId, pool: &'a AvatarPool) -> &'a str {
    let hash = rolling_hash(&id.to_string());
    // unsigned_abs keeps i32::MIN in range
    let index = hash.unsigned_abs() as usize % pool.emoji.len();
    &pool.emoji[index]
}
