// Copyright 2026 the cardbox authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::card::CardContent;

/// Add a single card to the collection. Content is validated before the
/// collection is touched.
pub fn add_card(directory: Option<String>, front: &str, back: &str) -> Fallible<()> {
    let content = CardContent::new(front, back)?;
    let mut coll = Collection::new(directory)?;
    let card = coll.db.insert_card(&content)?;
    println!("Added card {}.", card.id());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    use crate::error::ErrorKind;

    #[test]
    fn test_add_card() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().display().to_string();
        add_card(Some(path.clone()), "What is the capital of France?", "Paris")?;
        let coll = Collection::new(Some(path))?;
        assert_eq!(coll.db.card_count()?, 1);
        Ok(())
    }

    #[test]
    fn test_add_card_rejects_blank_text() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().display().to_string();
        let result = add_card(Some(path.clone()), "   ", "Paris");
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidInput);
        let coll = Collection::new(Some(path))?;
        assert_eq!(coll.db.card_count()?, 0);
        Ok(())
    }
}
