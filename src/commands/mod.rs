pub mod organize_cmds;
