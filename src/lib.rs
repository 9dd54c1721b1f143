pub mod configuration;

pub mod kinematics {
    pub mod invariantmass;
}

pub mod manager {
    pub mod manager;
    pub mod managererror;
}

pub mod math {
    pub mod integrand {
        pub mod integrand;
        pub mod analyticintegrand;
    }

    pub mod quadrature {
        pub mod quadratureerror;
        pub mod samplingmode;
        pub mod partition;
        pub mod riemannsum;
    }
}

pub mod value {
    pub mod integrationreport;
}
