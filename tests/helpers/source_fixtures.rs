//! Common Tonto sources for tests.

pub const PERSON_SUBKINDS: &str = r#"package People

kind Person
subkind Student specializes Person
subkind Employee specializes Person
"#;

pub const PERSON_SUBKINDS_WITH_GENSET: &str = r#"package People

kind Person
subkind Student specializes Person
subkind Employee specializes Person

disjoint genset PersonType {
    general Person
    specifics Student, Employee
}
"#;

pub const EMPLOYMENT_SINGLE_MEDIATION: &str = r#"package Work

kind Person
relator Employment { @mediation [1] -- [1] Person }
"#;

pub const HEADACHE_WITHOUT_DEPENDENCE: &str = r#"package Health

kind Person
kind Virus
mode Headache {
    @characterization [1..*] -- [1] Person
}
"#;

pub const HEADACHE_COMPLETE: &str = r#"package Health

kind Person
kind Virus
mode Headache {
    @characterization [1..*] -- [1] Person
    @externalDependence [1..*] -- [1] Virus
}
"#;

pub const PHASES_IN_TWO_GENSETS: &str = r#"package Life

kind Person
phase Child specializes Person
phase Adult specializes Person

disjoint complete genset AgeGroup { general Person specifics Child, Adult }
disjoint complete genset LegalStatus { general Person specifics Child, Adult }
"#;

pub const ROLES_IN_TWO_GENSETS: &str = r#"package Trade

kind Person
role Buyer specializes Person
role Seller specializes Person

genset Commerce { general Person specifics Buyer, Seller }
genset Auction { general Person specifics Buyer, Seller }

relation Buyer [1..*] -- trades -- [1..*] Seller
"#;

/// A model touching every declaration form and all six patterns
pub const CAR_RENTAL: &str = r#"package CarRental

import Base

datatype AddressDataType {
    street: String
    number: Number [0..1]
}

enum Category { Economy, Luxury }

kind Person {
    name: String
    address: AddressDataType
}
kind Organization
kind Car of functional-complexes {
    plate: String { const }
    segment: Category
}

subkind ElectricCar specializes Car
subkind CombustionCar specializes Car
disjoint complete genset Engine { general Car specifics ElectricCar, CombustionCar }

phase AvailableCar specializes Car
phase RentedCar specializes Car
disjoint complete genset Availability { general Car specifics AvailableCar, RentedCar }

role Customer specializes Person
role Employee specializes Person
genset PersonRoles { general Person specifics Customer, Employee, InsuredPerson }

relator Rental {
    @mediation [0..*] -- [1] Customer
    @mediation [0..*] -- [1] RentedCar
    startDate: Date
}
@material relation Customer [1..*] -- rents -- [0..*] RentedCar

roleMixin Insured
role InsuredPerson specializes Person, Insured
role InsuredOrganization specializes Organization, Insured
genset InsuredKinds { general Insured specifics InsuredPerson, InsuredOrganization }

relation Employee [1] -- [1] Customer

mode Damage {
    @characterization [0..*] -- [1] Car
    @externalDependence [0..*] -- [1] Person
}
"#;
