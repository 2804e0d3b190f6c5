// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kisan_domain::User;

use crate::collection::Collection;
use crate::gateway::{MarketplaceGateway, decode};
use crate::query::{Select, single};

impl MarketplaceGateway {
    /// All users, newest first.
    #[must_use]
    pub fn get_users(&self) -> Vec<User> {
        self.list("get_users")
    }

    /// Looks up the one user registered with `phone`.
    ///
    /// Returns `None` when no user, or more than one, matches.
    #[must_use]
    pub fn login_user(&self, phone: &str) -> Option<User> {
        let query = Select::all(Collection::Users).eq("phone", phone);
        self.soft("login_user", |store| {
            let row = single(Collection::Users, store.select(&query)?)?;
            decode(row)
        })
    }
}
