//! Sample staff used by the demo command and tests.

use crate::employee::EmployeeFields;
use crate::variants::{FilmCharacterEmployee, Programmer, Teacher};

pub fn pavel() -> Teacher {
    Teacher::new(
        EmployeeFields::new(
            "Pavel",
            "Novak",
            "Czech technical university",
            "Praha",
            "pavel.novak@seznam.cz",
        ),
        "Computer science",
    )
}

pub fn karel() -> Programmer {
    Programmer::new(
        EmployeeFields::new("Karel", "Novak", "Red Hat", "Brno", "karel.novak@seznam.cz"),
        "C++",
    )
}

pub fn petr() -> Teacher {
    Teacher::new(
        EmployeeFields::new(
            "Petr",
            "Novak",
            "University of Technology",
            "Brno",
            "petr.novak@seznam.cz",
        ),
        "Computer science",
    )
}

pub fn james() -> FilmCharacterEmployee {
    FilmCharacterEmployee::new(
        EmployeeFields::new("James", "Bond", "MI6", "Top secret", "james.bond@mi6.co.uk"),
        "Agent",
    )
}
