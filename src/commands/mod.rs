// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use structopt::StructOpt;

mod check;

pub trait Command {
    fn execute(self) -> anyhow::Result<()>;
}

#[derive(StructOpt, Debug)]
#[structopt(about = "the add-on repository validator")]
pub struct Main {
    #[structopt(flatten)]
    check: check::Check,
}

impl Command for Main {
    fn execute(self) -> anyhow::Result<()> {
        self.check.execute()
    }
}
