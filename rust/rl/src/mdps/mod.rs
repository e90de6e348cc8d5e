pub mod mdp;
